//! Filter to narrow candidates to the mood's complexity.
//!
//! Sparse complexity buckets would leave too few movies to rank, so the
//! filter only takes effect when enough candidates survive it.

use crate::traits::Filter;
use catalog::{Complexity, Movie};

/// Keeps only candidates with a matching complexity, if at least
/// `min_keep` of them exist; otherwise keeps every candidate.
pub struct ComplexityFilter {
    complexity: Complexity,
    min_keep: usize,
}

impl ComplexityFilter {
    /// # Arguments
    /// * `complexity` - The complexity to keep
    /// * `min_keep` - Minimum survivors for the filter to apply (the result size)
    pub fn new(complexity: Complexity, min_keep: usize) -> Self {
        Self {
            complexity,
            min_keep,
        }
    }
}

impl Filter for ComplexityFilter {
    fn name(&self) -> &str {
        "ComplexityFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let matching: Vec<&'a Movie> = candidates
            .iter()
            .copied()
            .filter(|movie| movie.complexity == self.complexity)
            .collect();

        if matching.len() >= self.min_keep {
            matching
        } else {
            candidates
        }
    }
}
