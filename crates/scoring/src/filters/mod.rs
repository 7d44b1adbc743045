//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod complexity;
pub mod exclude;
pub mod genre_overlap;

// Re-export for convenience
pub use complexity::ComplexityFilter;
pub use exclude::ExcludeMovieFilter;
pub use genre_overlap::GenreOverlapFilter;
