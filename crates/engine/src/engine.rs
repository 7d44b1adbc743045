//! # Recommendation Engine
//!
//! This module coordinates the recommendation flows over a catalog snapshot:
//! 1. Take the current `Arc<Catalog>` snapshot
//! 2. Narrow candidates with the filter pipeline
//! 3. Score candidates (mood, genre, or similarity scoring)
//! 4. Rank by score and select the top N
//!
//! The catalog lives behind `Arc<RwLock<Arc<Catalog>>>`. The lock only
//! guards swapping the inner `Arc`; every request clones the snapshot once
//! and then runs without holding the lock.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use tracing::{debug, info, instrument};

use catalog::{Catalog, Genre, Movie, MovieId, WatchHistory};
use mood::{MoodAnalyzer, MoodProfile, TimeOfDay};
use scoring::filters::{ComplexityFilter, ExcludeMovieFilter, GenreOverlapFilter};
use scoring::{FilterPipeline, jaccard_similarity, rank_top_n, score_candidates};

use crate::error::{EngineError, Result};
use crate::recommendation::Recommendation;

/// Weight of genre similarity in genre-based scoring
pub const GENRE_SIMILARITY_WEIGHT: f32 = 0.7;
/// Weight of rating in genre-based scoring
pub const GENRE_RATING_WEIGHT: f32 = 3.0;
/// Weight of genre similarity in "more like this" scoring
pub const SIMILAR_SIMILARITY_WEIGHT: f32 = 0.8;
/// Weight of rating in "more like this" scoring
pub const SIMILAR_RATING_WEIGHT: f32 = 2.0;
/// Score multiplier for rating-only ranking when no favorites are given
pub const RATING_ONLY_WEIGHT: f32 = 10.0;

/// Favorites quoted in the genre-based reason
const REASON_GENRES: usize = 2;

/// Main engine that serves every recommendation flow
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Arc<RwLock<Arc<Catalog>>>,
    analyzer: MoodAnalyzer,
}

impl RecommendationEngine {
    /// Create an engine that owns `catalog`
    pub fn new(catalog: Catalog) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    /// Create an engine over an already shared catalog snapshot
    pub fn from_shared(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            analyzer: MoodAnalyzer::new(),
        }
    }

    /// Create an engine over a validated `movies.dat` file
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = Catalog::load_from_file(path)?;
        Ok(Self::new(catalog))
    }

    /// Load `path` and swap it in as the new snapshot
    ///
    /// On error the current snapshot stays in place.
    pub fn reload(&self, path: &Path) -> Result<usize> {
        let catalog = Catalog::load_from_file(path)?;
        let count = catalog.len();
        self.replace_catalog(catalog);
        Ok(count)
    }

    /// Use a custom analyzer configuration (builder pattern)
    pub fn with_analyzer(mut self, analyzer: MoodAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Current catalog snapshot
    ///
    /// A poisoned lock still holds a complete `Arc`, so it is recovered
    /// rather than propagated.
    pub fn catalog(&self) -> Arc<Catalog> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Atomically swap in a new catalog snapshot
    ///
    /// Requests already running keep the snapshot they started with.
    pub fn replace_catalog(&self, catalog: Catalog) {
        let count = catalog.len();
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(catalog);
        info!("Catalog replaced: {} movies", count);
    }

    /// Infer a mood profile from free text at the current time of day
    pub fn analyze(&self, text: &str) -> MoodProfile {
        self.analyzer.analyze(text)
    }

    /// Infer a mood profile against an explicit time-of-day bucket
    pub fn analyze_at(&self, text: &str, time_of_day: TimeOfDay) -> MoodProfile {
        self.analyzer.analyze_at(text, time_of_day)
    }

    /// Analyze `text` and recommend for the resulting mood
    pub fn recommend_for_text(&self, text: &str, limit: usize) -> (MoodProfile, Vec<Recommendation>) {
        let profile = self.analyze(text);
        let recommendations = self.mood_recommendations(&profile, limit);
        (profile, recommendations)
    }

    /// Top `limit` movies for a mood profile
    ///
    /// Candidates are the movies matching the mood's complexity when there
    /// are at least `limit` of them, otherwise the whole catalog.
    #[instrument(skip(self, profile), fields(emotion = %profile.primary_emotion))]
    pub fn mood_recommendations(&self, profile: &MoodProfile, limit: usize) -> Vec<Recommendation> {
        let start_time = Instant::now();
        let catalog = self.catalog();

        let pipeline = FilterPipeline::new().add_filter(ComplexityFilter::new(profile.complexity, limit));
        let candidates = pipeline.apply(catalog.movies().iter().collect());
        debug!("{} mood candidates after filtering", candidates.len());

        let features = score_candidates(&candidates, profile);
        let scored: Vec<Recommendation> = candidates
            .iter()
            .zip(features)
            .map(|(movie, features)| Recommendation::from_features(movie, features))
            .collect();

        let recommendations = rank_top_n(scored, limit, |rec| rec.score);
        info!(
            "Selected {} mood recommendations from {} candidates in {:.2?}",
            recommendations.len(),
            candidates.len(),
            start_time.elapsed()
        );
        recommendations
    }

    /// Top `limit` movies for a set of favorite genres
    ///
    /// ## Algorithm
    /// - No favorites: rank by rating, score = rating × 10
    /// - Otherwise keep movies sharing a favorite genre (every movie if
    ///   none does) and score `jaccard × 0.7 + rating × 3`
    #[instrument(skip(self))]
    pub fn genre_recommendations(&self, favorites: &[Genre], limit: usize) -> Vec<Recommendation> {
        let catalog = self.catalog();

        if favorites.is_empty() {
            let scored = catalog
                .movies()
                .iter()
                .map(|movie| Recommendation::new(movie, movie.rating * RATING_ONLY_WEIGHT, "Highly rated"))
                .collect();
            let recommendations = rank_top_n(scored, limit, |rec| rec.score);
            info!("No favorite genres, returned {} top-rated movies", recommendations.len());
            return recommendations;
        }

        let reason = format!(
            "Matches your taste in {}",
            favorites
                .iter()
                .take(REASON_GENRES)
                .map(Genre::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let pipeline = FilterPipeline::new().add_filter(GenreOverlapFilter::new(favorites.to_vec()));
        let candidates = pipeline.apply(catalog.movies().iter().collect());
        debug!("{} genre candidates after filtering", candidates.len());

        let scored = candidates
            .into_iter()
            .map(|movie| {
                let score = jaccard_similarity(favorites, &movie.genres) * GENRE_SIMILARITY_WEIGHT
                    + movie.rating * GENRE_RATING_WEIGHT;
                Recommendation::new(movie, score, reason.as_str())
            })
            .collect();

        let recommendations = rank_top_n(scored, limit, |rec| rec.score);
        info!("Selected {} genre-based recommendations", recommendations.len());
        recommendations
    }

    /// Top `limit` movies resembling `movie_id`
    ///
    /// An unknown id yields an empty list.
    #[instrument(skip(self))]
    pub fn similar_movies(&self, movie_id: MovieId, limit: usize) -> Vec<Recommendation> {
        let catalog = self.catalog();

        let Some(target) = catalog.get_movie(movie_id) else {
            debug!("Movie {} not in catalog, no similar movies", movie_id);
            return Vec::new();
        };

        let pipeline = FilterPipeline::new().add_filter(ExcludeMovieFilter::new(movie_id));
        let candidates = pipeline.apply(catalog.movies().iter().collect());

        let scored = candidates
            .into_iter()
            .map(|movie| {
                let score = jaccard_similarity(&target.genres, &movie.genres) * SIMILAR_SIMILARITY_WEIGHT
                    + movie.rating * SIMILAR_RATING_WEIGHT;
                Recommendation::new(movie, score, "Similar style and genre")
            })
            .collect();

        let recommendations = rank_top_n(scored, limit, |rec| rec.score);
        info!(
            "Selected {} movies similar to '{}'",
            recommendations.len(),
            target.title
        );
        recommendations
    }

    /// Record that `movie_id` was watched, tagged with the active mood
    ///
    /// # Errors
    /// `EngineError::MovieNotFound` if the id is not in the catalog.
    pub fn mark_watched(
        &self,
        movie_id: MovieId,
        mood: Option<&MoodProfile>,
        history: &mut WatchHistory,
    ) -> Result<Movie> {
        let catalog = self.catalog();
        let movie = catalog
            .get_movie(movie_id)
            .ok_or(EngineError::MovieNotFound { id: movie_id })?;

        history.record(movie, mood.map(|profile| profile.primary_emotion.as_str()));
        info!("Marked '{}' as watched ({} in history)", movie.title, history.len());
        Ok(movie.clone())
    }
}
