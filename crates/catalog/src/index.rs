//! Catalog building and indexing logic.
//!
//! This module builds a Catalog from parsed records:
//! - Create the primary id index
//! - Build the secondary genre index
//! - Validate record invariants before the snapshot is handed out

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Built-in curated catalog, used when no catalog file is supplied
const SAMPLE_MOVIES: &str = include_str!("../data/sample_movies.dat");

impl Catalog {
    /// Build a validated catalog from records, keeping their order
    ///
    /// Fails on duplicate ids or on any record that breaks an invariant.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if id_index.insert(movie.id, pos).is_some() {
                return Err(CatalogError::DuplicateMovie { id: movie.id });
            }
        }

        let mut catalog = Catalog {
            movies,
            id_index,
            genre_index: HashMap::new(),
        };
        catalog.build_secondary_indices();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a `movies.dat` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);
        let movies = parser::parse_movies(path)?;
        let catalog = Self::from_movies(movies)?;
        info!("Catalog loaded: {} movies", catalog.len());
        Ok(catalog)
    }

    /// The built-in 50-movie sample catalog
    pub fn sample() -> Result<Self> {
        let movies = parser::parse_movies_str(SAMPLE_MOVIES, "sample_movies.dat")?;
        Self::from_movies(movies)
    }

    /// Rebuild the genre index from the primary data
    pub fn build_secondary_indices(&mut self) {
        self.genre_index.clear();
        for movie in &self.movies {
            for &genre in &movie.genres {
                self.genre_index.entry(genre).or_default().push(movie.id);
            }
        }
    }

    /// Validate record invariants
    ///
    /// Check that every movie:
    /// - has at least one genre
    /// - has a rating in 0.0 - 10.0
    ///
    /// Reports the first offending movie in catalog order.
    pub fn validate(&self) -> Result<()> {
        let problem = self.movies.par_iter().find_map_first(|movie| {
            if movie.genres.is_empty() {
                Some(format!("movie {} has no genres", movie.id))
            } else if !(0.0..=10.0).contains(&movie.rating) {
                Some(format!(
                    "movie {} has rating {} outside 0-10",
                    movie.id, movie.rating
                ))
            } else {
                None
            }
        });

        match problem {
            Some(reason) => Err(CatalogError::ValidationError(reason)),
            None => Ok(()),
        }
    }
}
