//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use catalog::Movie;

/// Core trait for narrowing a candidate set.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared by concurrent scoring calls
/// - Candidates are borrowed from a catalog snapshot; filters move the Vec
///   of references in and out without cloning any movie
/// - Filtering never fails. A filter that would leave too little behind
///   hands back its input instead
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates, preserving their order
    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie>;
}
