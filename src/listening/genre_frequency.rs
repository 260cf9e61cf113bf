//! Genre frequency aggregation over a user's artist list.
//!
//! The ranked view feeds the position-weighted genre comparison, the
//! flattened view feeds the frequency-vector comparison.

use super::models::{Artist, GenreTag};
use std::collections::HashMap;

/// Returns every distinct genre across `artists`, most frequent first.
///
/// Ties keep the order in which the genres were first encountered, so the
/// ranking is deterministic for a given artist list. Artists with no
/// genres contribute nothing.
pub fn ranked_genres(artists: &[Artist]) -> Vec<GenreTag> {
    let mut counts: HashMap<&GenreTag, usize> = HashMap::new();
    let mut first_seen: Vec<&GenreTag> = Vec::new();

    for artist in artists {
        for genre in &artist.genres {
            let count = counts.entry(genre).or_insert(0);
            if *count == 0 {
                first_seen.push(genre);
            }
            *count += 1;
        }
    }

    // Stable sort on the count alone keeps first-seen order for ties.
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen.into_iter().cloned().collect()
}

/// Concatenates every artist's genre list in artist order, duplicates kept.
pub fn flatten_genres(artists: &[Artist]) -> Vec<GenreTag> {
    artists
        .iter()
        .flat_map(|artist| artist.genres.iter().cloned())
        .collect()
}
