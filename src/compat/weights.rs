use thiserror::Error;

/// Relative weight of each sub-score in the overall compatibility score.
///
/// The five weights must sum to 1.0 so that the weighted sum stays on the
/// same 0..=1 scale as the individual metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricWeights {
    /// Cosine similarity over the raw genre multisets.
    pub genres: f64,
    /// Position-weighted Jaccard over the ranked genre lists.
    pub ranked_genres: f64,
    /// Set Jaccard over artist ids.
    pub artists: f64,
    /// Set Jaccard over track ids.
    pub tracks: f64,
    /// Closeness of the average popularity values.
    pub popularity: f64,
}

/// The standard weighting. Genre overlap carries most of the score;
/// popularity closeness is only a small nudge.
pub const DEFAULT_WEIGHTS: MetricWeights = MetricWeights {
    genres: 0.40,
    ranked_genres: 0.25,
    artists: 0.20,
    tracks: 0.10,
    popularity: 0.05,
};

const SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("metric weights sum to {0}, expected 1.0")]
    DoesNotSumToOne(f64),
}

impl MetricWeights {
    pub fn sum(&self) -> f64 {
        self.genres + self.ranked_genres + self.artists + self.tracks + self.popularity
    }

    /// Checks that the weights form a proper convex combination.
    pub fn validate(&self) -> Result<(), WeightsError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::DoesNotSumToOne(sum));
        }
        Ok(())
    }
}

impl Default for MetricWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
