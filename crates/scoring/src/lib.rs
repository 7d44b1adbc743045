//! Candidate filtering and scoring for mood-based recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing the candidate set
//! - FilterPipeline for composing filters
//! - Mood scoring with a per-factor breakdown (`MoodFeatures`)
//! - Genre-set Jaccard similarity
//! - Stable top-n ranking
//!
//! ## Architecture
//! A recommendation request runs in stages:
//! 1. Filters narrow the catalog (complexity match, genre overlap, exclusions)
//! 2. Each remaining candidate is scored in parallel
//! 3. Candidates are ranked by score, catalog order breaking ties
//!
//! ## Example Usage
//! ```ignore
//! use scoring::{FilterPipeline, rank_top_n, score_candidates};
//! use scoring::filters::ComplexityFilter;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ComplexityFilter::new(profile.complexity, 5));
//!
//! let candidates = pipeline.apply(catalog.movies().iter().collect());
//! let features = score_candidates(&candidates, &profile);
//! let top = rank_top_n(features, 5, |f| f.total());
//! ```

pub mod features;
pub mod filter_pipeline;
pub mod filters;
pub mod ranking;
pub mod similarity;
pub mod traits;

// Re-export main types
pub use features::{score_candidates, score_movie, MoodFeatures};
pub use filter_pipeline::FilterPipeline;
pub use ranking::rank_top_n;
pub use similarity::jaccard_similarity;
pub use traits::Filter;
