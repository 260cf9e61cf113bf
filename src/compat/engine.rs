//! Combines the individual similarity measures into one compatibility
//! score with an explainable breakdown.

use super::metrics;
use super::weights::{MetricWeights, WeightsError};
use crate::listening::{GenreTag, Profile};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Scale of the popularity axis (track popularity is 0..=100).
const POPULARITY_SCALE: f64 = 100.0;

/// The outcome of comparing two profiles: the overall score, the
/// per-metric breakdown and what the two users actually have in common.
///
/// Every value is rounded on its own, so the breakdown entries are not
/// required to recombine into `score` exactly.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CompatibilityReport {
    /// Overall compatibility, 0..=100.
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    /// Genres ranked by both users, in the first profile's order.
    pub shared_genres: Vec<GenreTag>,
    /// Names of artists both users listen to, in the first profile's order.
    pub shared_artists: Vec<String>,
    /// "track name - artist name" entries both users listen to, in the
    /// first profile's order.
    pub shared_tracks: Vec<String>,
}

/// Per-metric sub-scores, each 0..=100.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub genres: u8,
    pub ranked_genres: u8,
    pub artists: u8,
    pub tracks: u8,
    pub popularity: u8,
}

/// Stateless scoring engine. A single engine can compare any number of
/// profile pairs, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    weights: MetricWeights,
}

impl CompatibilityEngine {
    /// Engine with the standard weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom weights, rejected unless they sum to 1.0.
    pub fn with_weights(weights: MetricWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Scores how compatible two users' listening profiles are.
    ///
    /// Symmetric up to the ordering of the shared-item lists, which follow
    /// `a`. Total over well-formed profiles: two users with nothing in
    /// common (or nothing in their profiles at all) score 0, they never
    /// produce an error.
    pub fn compare(&self, a: &Profile, b: &Profile) -> CompatibilityReport {
        let ids_a = artist_ids(a);
        let ids_b = artist_ids(b);
        let track_ids_a = track_ids(a);
        let track_ids_b = track_ids(b);

        let genre_sim = metrics::frequency_cosine(&a.all_genres, &b.all_genres);
        let ranked_genre_sim = metrics::weighted_jaccard(&a.top_genres, &b.top_genres);
        let artist_sim = metrics::set_jaccard(&ids_a, &ids_b);
        let track_sim = metrics::set_jaccard(&track_ids_a, &track_ids_b);
        let popularity_sim =
            metrics::scalar_closeness(a.avg_popularity, b.avg_popularity, POPULARITY_SCALE);

        debug!(
            genre_sim,
            ranked_genre_sim, artist_sim, track_sim, popularity_sim, "computed sub-scores"
        );

        let weighted = self.weights.genres * genre_sim
            + self.weights.ranked_genres * ranked_genre_sim
            + self.weights.artists * artist_sim
            + self.weights.tracks * track_sim
            + self.weights.popularity * popularity_sim;

        CompatibilityReport {
            score: to_percent(weighted),
            breakdown: ScoreBreakdown {
                genres: to_percent(genre_sim),
                ranked_genres: to_percent(ranked_genre_sim),
                artists: to_percent(artist_sim),
                tracks: to_percent(track_sim),
                popularity: to_percent(popularity_sim),
            },
            shared_genres: shared_genres(a, b),
            shared_artists: shared_artists(a, b),
            shared_tracks: shared_tracks(a, b),
        }
    }
}

fn to_percent(value: f64) -> u8 {
    (value * 100.0).round() as u8
}

fn artist_ids(profile: &Profile) -> Vec<&str> {
    profile.top_artists.iter().map(|a| a.id.as_str()).collect()
}

fn track_ids(profile: &Profile) -> Vec<&str> {
    profile.top_tracks.iter().map(|t| t.id.as_str()).collect()
}

fn shared_genres(a: &Profile, b: &Profile) -> Vec<GenreTag> {
    let in_b: HashSet<&GenreTag> = b.top_genres.iter().collect();
    a.top_genres
        .iter()
        .filter(|genre| in_b.contains(*genre))
        .cloned()
        .collect()
}

fn shared_artists(a: &Profile, b: &Profile) -> Vec<String> {
    let ids_in_b: HashSet<&str> = b.top_artists.iter().map(|x| x.id.as_str()).collect();
    a.top_artists
        .iter()
        .filter(|artist| ids_in_b.contains(artist.id.as_str()))
        .map(|artist| artist.name.clone())
        .collect()
}

fn shared_tracks(a: &Profile, b: &Profile) -> Vec<String> {
    let ids_in_b: HashSet<&str> = b.top_tracks.iter().map(|t| t.id.as_str()).collect();
    a.top_tracks
        .iter()
        .filter(|track| ids_in_b.contains(track.id.as_str()))
        .map(|track| format!("{} - {}", track.name, track.artist_name))
        .collect()
}
