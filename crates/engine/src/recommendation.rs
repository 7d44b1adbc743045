//! Recommendation results handed back to callers.

use catalog::Movie;
use scoring::MoodFeatures;
use serde::Serialize;

/// A ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Snapshot of the recommended movie
    pub movie: Movie,
    /// Ranking score; not normalized, may exceed 100 for mood results
    pub score: f32,
    /// Short human-readable justification
    pub reason: String,
    /// Per-factor breakdown, present for mood-based results only
    #[serde(skip)]
    pub features: Option<MoodFeatures>,
}

impl Recommendation {
    pub fn new(movie: &Movie, score: f32, reason: impl Into<String>) -> Self {
        Self {
            movie: movie.clone(),
            score,
            reason: reason.into(),
            features: None,
        }
    }

    /// Build from a mood score breakdown, keeping the breakdown
    pub fn from_features(movie: &Movie, features: MoodFeatures) -> Self {
        Self {
            movie: movie.clone(),
            score: features.total(),
            reason: features.reason(),
            features: Some(features),
        }
    }
}
