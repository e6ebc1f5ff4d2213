//! Coarse string-similarity signals used when pattern extraction fails.
//!
//! These are deliberately weak: they keep unparsed-but-similar part numbers
//! off the floor without competing with field-level evidence.

use std::collections::HashSet;

use crate::core::mpn::tokenize;

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Shared-prefix length normalized by the longer input's length.
///
/// Returns 0.0 when either input is empty (no evidence beats false
/// positives from two empty strings).
#[must_use]
pub fn shared_prefix_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let shared = a
        .chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .count();

    count_to_f64(shared) / count_to_f64(len_a.max(len_b))
}

/// Jaccard overlap of delimiter tokens: |intersection| / |union|.
///
/// Returns 0.0 when both token sets are empty.
#[must_use]
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = tokenize(a).into_iter().collect();
    let tokens_b: HashSet<&str> = tokenize(b).into_iter().collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    count_to_f64(intersection) / count_to_f64(union)
}

/// The stronger of the two coarse signals. Used as the fallback similarity
/// for MPNs no registry rule can parse.
#[must_use]
pub fn coarse_similarity(a: &str, b: &str) -> f64 {
    shared_prefix_ratio(a, b).max(token_overlap(a, b))
}
