//! Engine crate for the CineMatch recommendation core.
//!
//! This crate contains the engine that ties mood analysis, candidate
//! filtering and scoring together over a shared catalog snapshot.

pub mod engine;
pub mod error;
pub mod recommendation;

pub use engine::RecommendationEngine;
pub use error::{EngineError, Result};
pub use recommendation::Recommendation;
