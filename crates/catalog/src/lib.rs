//! # Catalog Crate
//!
//! This crate owns the movie catalog the recommender scores against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, Complexity, Catalog)
//! - **parser**: Parse `movies.dat` files into Rust structs
//! - **index**: Build and validate the catalog and its genre index
//! - **query**: Search, filter and browse a loaded catalog
//! - **history**: Append-only watch history log
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Genre};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.dat"))?;
//!
//! let movie = catalog.get_movie(4).unwrap();
//! let dramas = catalog.movies_by_genre(Genre::Drama);
//!
//! println!("{} is one of {} dramas", movie.title, dramas.len());
//! ```
//!
//! A catalog is loaded once and then only read. Sharing one across threads
//! is a matter of wrapping it in an `Arc`.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod query;
pub mod history;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use history::{WatchHistory, WatchHistoryEntry, WatchStats};
pub use query::{BrowseQuery, BrowseSort};
pub use types::{Catalog, Complexity, Genre, Movie, MovieId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        // Querying non-existent data should return None or empty slices
        assert!(catalog.get_movie(999).is_none());
        assert!(catalog.movies_by_genre(Genre::Action).is_empty());
        assert!(catalog.all_genres().is_empty());
        assert!(catalog.search_by_title("anything").is_empty());
    }
}
