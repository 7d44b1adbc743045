//! Filter to drop one movie from the candidate set.
//!
//! Used by "more like this": the reference movie shouldn't recommend itself.

use crate::traits::Filter;
use catalog::{Movie, MovieId};

pub struct ExcludeMovieFilter {
    movie_id: MovieId,
}

impl ExcludeMovieFilter {
    pub fn new(movie_id: MovieId) -> Self {
        Self { movie_id }
    }
}

impl Filter for ExcludeMovieFilter {
    fn name(&self) -> &str {
        "ExcludeMovieFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Movie>) -> Vec<&'a Movie> {
        candidates
            .into_iter()
            .filter(|movie| movie.id != self.movie_id)
            .collect()
    }
}
