use super::genre_frequency;
use super::models::{Artist, GenreTag, Track};
use serde::{Deserialize, Serialize};

/// Upper bound on the track and artist lists kept per user.
pub const TOP_ITEMS_LIMIT: usize = 50;

/// Popularity assumed for a user with no listened tracks.
const DEFAULT_AVG_POPULARITY: f64 = 50.0;

/// A user's listening profile, built once per session and read-only after.
///
/// The profile lives in memory for the duration of the process; nothing
/// about it survives a restart.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Profile {
    pub display_name: String,
    /// Most-listened tracks, most listened first.
    pub top_tracks: Vec<Track>,
    /// Most-listened artists, most listened first.
    pub top_artists: Vec<Artist>,
    /// Distinct genres ranked by how often they occur across `top_artists`.
    pub top_genres: Vec<GenreTag>,
    /// Every genre occurrence across `top_artists`, duplicates kept. Raw
    /// signal for the frequency-vector comparison.
    pub all_genres: Vec<GenreTag>,
    pub avg_popularity: f64,
}

impl Profile {
    /// Builds a profile from raw listening data.
    ///
    /// Collections longer than [`TOP_ITEMS_LIMIT`] are truncated and
    /// artists without genres are fine; no other validation happens here.
    pub fn build(
        display_name: impl Into<String>,
        mut artists: Vec<Artist>,
        mut tracks: Vec<Track>,
    ) -> Self {
        artists.truncate(TOP_ITEMS_LIMIT);
        tracks.truncate(TOP_ITEMS_LIMIT);

        let top_genres = genre_frequency::ranked_genres(&artists);
        let all_genres = genre_frequency::flatten_genres(&artists);
        let avg_popularity = if tracks.is_empty() {
            DEFAULT_AVG_POPULARITY
        } else {
            tracks.iter().map(|t| t.popularity as f64).sum::<f64>() / tracks.len() as f64
        };

        Self {
            display_name: display_name.into(),
            top_tracks: tracks,
            top_artists: artists,
            top_genres,
            all_genres,
            avg_popularity,
        }
    }
}
