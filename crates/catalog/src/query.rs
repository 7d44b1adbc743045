//! Read-only queries over a Catalog.
//!
//! Everything here borrows from the catalog and returns movies in catalog
//! order unless a sort is explicitly requested.

use crate::types::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Ordering applied to browse results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowseSort {
    #[default]
    RatingDesc,
    RatingAsc,
    YearNewest,
    YearOldest,
    Title,
}

/// Filters for browsing the catalog.
///
/// Unset bounds don't filter anything; an empty genre list matches every movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseQuery {
    pub genres: Vec<Genre>,
    pub year_min: Option<u16>,
    pub year_max: Option<u16>,
    pub min_rating: Option<f32>,
    pub sort: BrowseSort,
}

impl Catalog {
    /// Sorted list of every genre present in the catalog
    pub fn all_genres(&self) -> Vec<Genre> {
        self.movies
            .iter()
            .flat_map(|movie| movie.genres.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Movies sharing at least one genre with `genres` (all movies if empty)
    pub fn filter_by_genres(&self, genres: &[Genre]) -> Vec<&Movie> {
        if genres.is_empty() {
            return self.movies.iter().collect();
        }
        self.movies
            .iter()
            .filter(|movie| movie.genres.iter().any(|g| genres.contains(g)))
            .collect()
    }

    pub fn filter_by_complexity(&self, complexity: Complexity) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.complexity == complexity)
            .collect()
    }

    /// Movies no longer than `max_runtime` minutes
    pub fn filter_by_runtime(&self, max_runtime: u16) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.runtime <= max_runtime)
            .collect()
    }

    /// Case-insensitive substring search on titles
    pub fn search_by_title(&self, query: &str) -> Vec<&Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Apply a browse query: genre, year range and rating filters, then sort
    pub fn browse(&self, query: &BrowseQuery) -> Vec<&Movie> {
        let mut results: Vec<&Movie> = self
            .filter_by_genres(&query.genres)
            .into_iter()
            .filter(|movie| query.year_min.is_none_or(|min| movie.year >= min))
            .filter(|movie| query.year_max.is_none_or(|max| movie.year <= max))
            .filter(|movie| query.min_rating.is_none_or(|min| movie.rating >= min))
            .collect();

        match query.sort {
            BrowseSort::RatingDesc => results.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            BrowseSort::RatingAsc => results.sort_by(|a, b| {
                a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal)
            }),
            BrowseSort::YearNewest => results.sort_by(|a, b| b.year.cmp(&a.year)),
            BrowseSort::YearOldest => results.sort_by_key(|movie| movie.year),
            BrowseSort::Title => results.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        results
    }
}
