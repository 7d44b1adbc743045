//! Ranking of scored candidates.

use std::cmp::Ordering;

/// Sort by score descending and keep the first `n`.
///
/// The sort is stable, so equal scores keep their input order (catalog
/// order for every recommender in this workspace). NaN scores compare
/// as equal rather than panicking.
pub fn rank_top_n<T, F>(mut items: Vec<T>, n: usize, score: F) -> Vec<T>
where
    F: Fn(&T) -> f32,
{
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
    items.truncate(n);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_and_truncated() {
        let ranked = rank_top_n(vec![("a", 1.0), ("b", 3.0), ("c", 2.0)], 2, |item| item.1);
        assert_eq!(ranked, vec![("b", 3.0), ("c", 2.0)]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![("first", 5.0), ("second", 7.0), ("third", 5.0), ("fourth", 5.0)];
        let ranked = rank_top_n(items, 10, |item| item.1);
        let names: Vec<&str> = ranked.iter().map(|item| item.0).collect();
        assert_eq!(names, vec!["second", "first", "third", "fourth"]);
    }

    #[test]
    fn test_n_larger_than_input() {
        let ranked = rank_top_n(vec![1.0_f32, 2.0], 5, |x| *x);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_zero_n_is_empty() {
        assert!(rank_top_n(vec![1.0_f32], 0, |x| *x).is_empty());
    }
}
