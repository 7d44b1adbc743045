//! Error types for the engine crate.

use catalog::{CatalogError, MovieId};
use thiserror::Error;

/// Errors raised by engine operations that can fail
///
/// Recommendation queries never fail; only catalog loading and
/// marking a movie as watched do.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The movie id is not in the current catalog snapshot
    #[error("Movie {id} not found in catalog")]
    MovieNotFound { id: MovieId },

    /// The catalog file could not be read or failed validation
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
