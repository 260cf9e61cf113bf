//! Pairwise similarity measures between parts of two listening profiles.
//!
//! Every function here is pure, symmetric in its two inputs and returns a
//! value in [0, 1]. Degenerate input (empty lists, zero magnitudes) means
//! zero similarity, never an error.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Plain Jaccard similarity over the unique elements of both inputs.
///
/// |A ∩ B| / |A ∪ B|. Order and duplicates are irrelevant. Returns 0.0
/// when both inputs are empty (the union is empty).
pub fn set_jaccard<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Jaccard similarity where earlier positions matter more.
///
/// An element at 0-based position `i` carries weight `1/(i+1)`; an element
/// listed at several positions accumulates its weights. The score is the
/// ratio of min-weight mass to max-weight mass over the union of elements,
/// so two lists sharing their top entries score higher than two lists
/// sharing only their tails. Returns 0.0 when both lists are empty.
pub fn weighted_jaccard<T: Eq + Hash>(ranked_a: &[T], ranked_b: &[T]) -> f64 {
    let weights_a = rank_weights(ranked_a);
    let weights_b = rank_weights(ranked_b);

    let mut intersection_mass = 0.0;
    let mut union_mass = 0.0;
    for (item, &weight_a) in &weights_a {
        let weight_b = weights_b.get(item).copied().unwrap_or(0.0);
        intersection_mass += weight_a.min(weight_b);
        union_mass += weight_a.max(weight_b);
    }
    for (item, &weight_b) in &weights_b {
        if !weights_a.contains_key(item) {
            union_mass += weight_b;
        }
    }

    if union_mass == 0.0 {
        return 0.0;
    }
    intersection_mass / union_mass
}

fn rank_weights<T: Eq + Hash>(ranked: &[T]) -> HashMap<&T, f64> {
    let mut weights = HashMap::new();
    for (position, item) in ranked.iter().enumerate() {
        *weights.entry(item).or_insert(0.0) += 1.0 / (position as f64 + 1.0);
    }
    weights
}

/// Cosine similarity between the occurrence-count vectors of two multisets.
///
/// Categories are the distinct element values and both vectors are indexed
/// by the union of categories; since matched indices line up, the map
/// iteration order does not matter. Returns 0.0 when either vector has
/// zero magnitude.
pub fn frequency_cosine<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let counts_a = occurrence_counts(a);
    let counts_b = occurrence_counts(b);

    let magnitude_a = magnitude(&counts_a);
    let magnitude_b = magnitude(&counts_b);
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = counts_a
        .iter()
        .filter_map(|(item, &count_a)| counts_b.get(item).map(|&count_b| count_a * count_b))
        .sum();
    dot / (magnitude_a * magnitude_b)
}

fn occurrence_counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, f64> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0.0) += 1.0;
    }
    counts
}

fn magnitude<T>(counts: &HashMap<&T, f64>) -> f64 {
    counts.values().map(|count| count * count).sum::<f64>().sqrt()
}

/// Closeness of two scalars on a 0..=scale axis: 1 at equality, 0 at
/// opposite ends of the axis.
pub fn scalar_closeness(x: f64, y: f64, scale: f64) -> f64 {
    (1.0 - (x - y).abs() / scale).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    // ==========================================================================
    // set_jaccard
    // ==========================================================================

    #[test]
    fn set_jaccard_identical() {
        let a = ["x", "y", "z"];
        assert!((set_jaccard(&a, &a) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn set_jaccard_partial_overlap() {
        let a = ["1", "2", "3", "4"];
        let b = ["3", "4", "5", "6"];
        // Intersection = {3, 4}, union = {1..6}
        assert!((set_jaccard(&a, &b) - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn set_jaccard_disjoint() {
        let a = ["1", "2"];
        let b = ["3", "4"];
        assert!(set_jaccard(&a, &b).abs() < EPSILON);
    }

    #[test]
    fn set_jaccard_both_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(set_jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn set_jaccard_ignores_duplicates() {
        let a = ["x", "x", "y"];
        let b = ["x", "y"];
        assert!((set_jaccard(&a, &b) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn set_jaccard_symmetric() {
        let a = ["1", "2", "3"];
        let b = ["2", "3", "4", "5"];
        assert_eq!(set_jaccard(&a, &b), set_jaccard(&b, &a));
    }

    // ==========================================================================
    // weighted_jaccard
    // ==========================================================================

    #[test]
    fn weighted_jaccard_identical_lists() {
        let a = ["pop", "rock", "indie"];
        assert!((weighted_jaccard(&a, &a) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn weighted_jaccard_rewards_shared_head() {
        let a = ["pop", "rock", "indie"];
        let b = ["pop", "rock", "jazz"];
        // Weights: pop=1, rock=1/2, indie=1/3 / jazz=1/3.
        // Intersection mass = 1 + 1/2, union mass = 1 + 1/2 + 1/3 + 1/3.
        let expected = 1.5 / (1.5 + 2.0 / 3.0);
        let sim = weighted_jaccard(&a, &b);
        assert!((sim - expected).abs() < EPSILON);
        assert!((sim - 0.692).abs() < 0.001);
    }

    #[test]
    fn weighted_jaccard_shared_tail_scores_lower_than_shared_head() {
        let head = weighted_jaccard(&["pop", "rock", "indie"], &["pop", "rock", "jazz"]);
        let tail = weighted_jaccard(&["indie", "pop", "rock"], &["jazz", "pop", "rock"]);
        assert!(head > tail);
    }

    #[test]
    fn weighted_jaccard_accumulates_duplicate_positions() {
        // "pop" at positions 0 and 1 weighs 1 + 1/2 on the left, 1 on the right.
        let a = ["pop", "pop"];
        let b = ["pop"];
        let expected = 1.0 / 1.5;
        assert!((weighted_jaccard(&a, &b) - expected).abs() < EPSILON);
    }

    #[test]
    fn weighted_jaccard_both_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(weighted_jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn weighted_jaccard_symmetric() {
        let a = ["pop", "rock", "indie"];
        let b = ["rock", "jazz"];
        assert!((weighted_jaccard(&a, &b) - weighted_jaccard(&b, &a)).abs() < EPSILON);
    }

    // ==========================================================================
    // frequency_cosine
    // ==========================================================================

    #[test]
    fn cosine_identical_multisets() {
        let a = ["pop", "pop", "rock"];
        assert!((frequency_cosine(&a, &a) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn cosine_disjoint_multisets() {
        let a = ["pop", "pop"];
        let b = ["jazz", "blues"];
        assert!(frequency_cosine(&a, &b).abs() < EPSILON);
    }

    #[test]
    fn cosine_either_empty() {
        let a = ["pop"];
        let empty: [&str; 0] = [];
        assert_eq!(frequency_cosine(&a, &empty), 0.0);
        assert_eq!(frequency_cosine(&empty, &a), 0.0);
        assert_eq!(frequency_cosine(&empty, &empty), 0.0);
    }

    #[test]
    fn cosine_counts_matter() {
        // (2,1)·(1,2) / (sqrt(5)·sqrt(5)) = 4/5
        let a = ["pop", "pop", "rock"];
        let b = ["pop", "rock", "rock"];
        assert!((frequency_cosine(&a, &b) - 0.8).abs() < EPSILON);
    }

    #[test]
    fn cosine_symmetric() {
        let a = ["pop", "pop", "rock", "indie"];
        let b = ["rock", "indie", "indie"];
        assert!((frequency_cosine(&a, &b) - frequency_cosine(&b, &a)).abs() < EPSILON);
    }

    // ==========================================================================
    // scalar_closeness
    // ==========================================================================

    #[test]
    fn closeness_of_equal_values() {
        assert_eq!(scalar_closeness(70.0, 70.0, 100.0), 1.0);
    }

    #[test]
    fn closeness_of_opposite_ends() {
        assert_eq!(scalar_closeness(0.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn closeness_of_nearby_values() {
        assert!((scalar_closeness(60.0, 50.0, 100.0) - 0.9).abs() < EPSILON);
    }

    #[test]
    fn closeness_symmetric() {
        assert_eq!(
            scalar_closeness(30.0, 80.0, 100.0),
            scalar_closeness(80.0, 30.0, 100.0)
        );
    }
}
