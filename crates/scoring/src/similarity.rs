//! Genre-set similarity.

use catalog::Genre;
use std::collections::HashSet;

/// Jaccard similarity of two genre lists, as a percentage (0-100).
///
/// ## Algorithm
/// Jaccard similarity = |intersection| / |union|, over the lists as sets.
/// Returns 0.0 when either list is empty.
pub fn jaccard_similarity(a: &[Genre], b: &[Genre]) -> f32 {
    let set_a: HashSet<Genre> = a.iter().copied().collect();
    let set_b: HashSet<Genre> = b.iter().copied().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count() as f32;
    let union = set_a.union(&set_b).count() as f32;
    intersection / union * 100.0
}
