//! Watch history log.
//!
//! The log is append-only and lives in memory; the persistence collaborator
//! moves it to and from storage with [`WatchHistory::to_json`] and
//! [`WatchHistory::from_json`]. Scoring never reads it.

use crate::error::Result;
use crate::types::{Catalog, Genre, Movie, MovieId};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary of a watch history against the current catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchStats {
    pub movies_watched: usize,
    /// Runtime of every watched movie still in the catalog
    pub total_minutes: u32,
    /// Mean catalog rating of watched movies; `None` if none are in the catalog
    pub average_rating: Option<f32>,
    /// Most-watched genre; earliest seen wins ties
    pub favorite_genre: Option<Genre>,
}

impl WatchStats {
    pub fn total_hours(&self) -> u32 {
        self.total_minutes / 60
    }
}

/// One "marked as watched" event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchHistoryEntry {
    pub movie_id: MovieId,
    pub title: String,
    /// Genres as they were when the movie was watched
    pub genres: Vec<Genre>,
    /// Primary emotion active when the movie was marked, if any
    pub mood: Option<String>,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchHistory {
    entries: Vec<WatchHistoryEntry>,
}

impl WatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `movie`, stamped with the current local time
    pub fn record(&mut self, movie: &Movie, mood: Option<&str>) -> &WatchHistoryEntry {
        self.record_at(movie, mood, Local::now())
    }

    pub fn record_at(
        &mut self,
        movie: &Movie,
        mood: Option<&str>,
        timestamp: DateTime<Local>,
    ) -> &WatchHistoryEntry {
        self.entries.push(WatchHistoryEntry {
            movie_id: movie.id,
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            mood: mood.map(str::to_string),
            timestamp,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[WatchHistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// How many watched entries carried each genre
    pub fn genre_frequency(&self) -> HashMap<Genre, usize> {
        let mut counts = HashMap::new();
        for entry in &self.entries {
            for &genre in &entry.genres {
                *counts.entry(genre).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Calendar dates of every watch, in log order
    pub fn watch_dates(&self) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .map(|entry| entry.timestamp.date_naive())
            .collect()
    }

    /// Totals for the log, looking runtimes and ratings up in `catalog`
    ///
    /// Entries whose movie has left the catalog still count as watched and
    /// toward the favorite genre, but add no runtime or rating.
    pub fn stats(&self, catalog: &Catalog) -> WatchStats {
        let watched: Vec<&Movie> = self
            .entries
            .iter()
            .filter_map(|entry| catalog.get_movie(entry.movie_id))
            .collect();

        let total_minutes = watched.iter().map(|movie| u32::from(movie.runtime)).sum();
        let average_rating = if watched.is_empty() {
            None
        } else {
            Some(watched.iter().map(|movie| movie.rating).sum::<f32>() / watched.len() as f32)
        };

        WatchStats {
            movies_watched: self.entries.len(),
            total_minutes,
            average_rating,
            favorite_genre: self.favorite_genre(),
        }
    }

    fn favorite_genre(&self) -> Option<Genre> {
        let mut counts: Vec<(Genre, usize)> = Vec::new();
        for entry in &self.entries {
            for &genre in &entry.genres {
                match counts.iter_mut().find(|(seen, _)| *seen == genre) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((genre, 1)),
                }
            }
        }

        let mut best: Option<(Genre, usize)> = None;
        for (genre, count) in counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((genre, count));
            }
        }
        best.map(|(genre, _)| genre)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
