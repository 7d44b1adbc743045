//! Filter to keep movies sharing a genre with the user's favorites.

use crate::traits::Filter;
use catalog::{Genre, Movie};

/// Keeps candidates with at least one genre in `genres`.
///
/// ## Algorithm
/// 1. An empty favorite list keeps everything
/// 2. Otherwise keep movies with any genre overlap
/// 3. If nothing overlaps, keep the original candidates rather than
///    returning an empty set
pub struct GenreOverlapFilter {
    genres: Vec<Genre>,
}

impl GenreOverlapFilter {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }
}

impl Filter for GenreOverlapFilter {
    fn name(&self) -> &str {
        "GenreOverlapFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        if self.genres.is_empty() {
            return candidates;
        }

        let overlapping: Vec<&'a Movie> = candidates
            .iter()
            .copied()
            .filter(|movie| movie.genres.iter().any(|genre| self.genres.contains(genre)))
            .collect();

        if overlapping.is_empty() {
            candidates
        } else {
            overlapping
        }
    }
}
