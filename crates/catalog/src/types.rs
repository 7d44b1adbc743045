//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Enums for closed sets of values (Genre, Complexity)
//! - `FromStr` / `Display` pairs so enums round-trip through text files
//! - HashMap indices over an ordered Vec

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie in the catalog
pub type MovieId = u32;

// =============================================================================
// Genre
// =============================================================================

/// Genre tags known to the recommender.
///
/// The set is closed: every tag used by the emotion and time-of-day tables,
/// plus every tag a catalog source can produce. Multi-word tags serialize as
/// their display form (`"Sci-Fi"`, `"Light Comedy"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    #[serde(rename = "Art House")]
    ArtHouse,
    Biography,
    Classic,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    #[serde(rename = "Feel-Good")]
    FeelGood,
    History,
    Horror,
    #[serde(rename = "Light Comedy")]
    LightComedy,
    #[serde(rename = "Light Drama")]
    LightDrama,
    Music,
    Musical,
    Mystery,
    Period,
    Psychological,
    Romance,
    #[serde(rename = "Romantic Comedy")]
    RomanticComedy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Sport,
    Thriller,
    #[serde(rename = "TV Movie")]
    TvMovie,
    War,
    Western,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 30] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::ArtHouse,
        Genre::Biography,
        Genre::Classic,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::FeelGood,
        Genre::History,
        Genre::Horror,
        Genre::LightComedy,
        Genre::LightDrama,
        Genre::Music,
        Genre::Musical,
        Genre::Mystery,
        Genre::Period,
        Genre::Psychological,
        Genre::Romance,
        Genre::RomanticComedy,
        Genre::SciFi,
        Genre::Sport,
        Genre::Thriller,
        Genre::TvMovie,
        Genre::War,
        Genre::Western,
    ];

    /// Canonical display string, as written in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::ArtHouse => "Art House",
            Genre::Biography => "Biography",
            Genre::Classic => "Classic",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::FeelGood => "Feel-Good",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::LightComedy => "Light Comedy",
            Genre::LightDrama => "Light Drama",
            Genre::Music => "Music",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Period => "Period",
            Genre::Psychological => "Psychological",
            Genre::Romance => "Romance",
            Genre::RomanticComedy => "Romantic Comedy",
            Genre::SciFi => "Sci-Fi",
            Genre::Sport => "Sport",
            Genre::Thriller => "Thriller",
            Genre::TvMovie => "TV Movie",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    /// Parse a canonical genre string (case-insensitive)
    ///
    /// Example: "Sci-Fi" -> Ok(Genre::SciFi)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "genre".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Complexity
// =============================================================================

/// Coarse cognitive-load classification, shared by movies and moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    /// Complexity assigned to a movie from its primary genre when the
    /// source doesn't provide one
    pub fn for_genre(genre: Genre) -> Self {
        match genre {
            Genre::Animation | Genre::Family | Genre::Comedy | Genre::Romance | Genre::Music => {
                Complexity::Low
            }
            Genre::Thriller | Genre::Mystery | Genre::SciFi | Genre::Horror | Genre::War => {
                Complexity::High
            }
            _ => Complexity::Medium,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            _ => Err(CatalogError::InvalidValue {
                field: "complexity".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the catalog.
///
/// Records are immutable once loaded; scoring only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    /// Ordered genre tags; the first one is the movie's primary genre
    pub genres: Vec<Genre>,
    /// Rating on a 0-10 scale
    pub rating: f32,
    /// Runtime in minutes
    pub runtime: u16,
    pub complexity: Complexity,
}

impl Movie {
    /// First listed genre, used in reason strings
    pub fn primary_genre(&self) -> Option<Genre> {
        self.genres.first().copied()
    }

    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }

    /// Genres joined the way catalog files store them ("Action|Sci-Fi")
    pub fn genres_label(&self) -> String {
        self.genres
            .iter()
            .map(Genre::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

// =============================================================================
// Catalog - The In-Memory Snapshot
// =============================================================================

/// Read-only movie catalog with lookup indices.
///
/// Movies are kept in insertion order, which is also the tie-break order for
/// every ranking built on top of the catalog.
///
/// Rust concepts demonstrated:
/// - `Vec<T>` for ordered storage plus `HashMap<K, usize>` for O(1) lookup
/// - Borrowing: getters return `&T` and slices, never clones
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    /// Position of each movie id in `movies`
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Movies grouped by genre (a movie appears once per genre it carries)
    pub(crate) genre_index: HashMap<Genre, Vec<MovieId>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            id_index: HashMap::new(),
            genre_index: HashMap::new(),
        }
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.id_index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Get the ids of all movies carrying a genre
    pub fn movies_by_genre(&self, genre: Genre) -> &[MovieId] {
        self.genre_index
            .get(&genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
