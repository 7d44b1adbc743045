//! Mood scoring for candidates.
//!
//! Every candidate gets an additive point breakdown against a mood profile,
//! plus the reason fragments that explain it.
//!
//! | Factor | Points |
//! |---|---|
//! | Rating | `rating / 10 * 50` |
//! | Genre overlap | share of the movie's genres the mood prefers, `* 30` |
//! | Time of day | 5 per genre matching the time bucket |
//! | Complexity match | 15 |
//! | Energy alignment | 10 |
//!
//! Totals are not normalized and can exceed 100.

use catalog::{Complexity, Genre, Movie, MovieId};
use mood::{EnergyLevel, MoodProfile};
use rayon::prelude::*;

pub const RATING_POINTS: f32 = 50.0;
pub const GENRE_POINTS: f32 = 30.0;
pub const TIME_POINTS_PER_GENRE: f32 = 5.0;
pub const COMPLEXITY_MATCH_POINTS: f32 = 15.0;
pub const ENERGY_POINTS: f32 = 10.0;

/// Reason fragments shown per recommendation
pub const MAX_REASONS: usize = 2;
pub const REASON_SEPARATOR: &str = " • ";

/// Point breakdown for one candidate against one mood profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodFeatures {
    pub movie_id: MovieId,
    pub rating_points: f32,
    pub genre_points: f32,
    pub time_points: f32,
    pub complexity_points: f32,
    pub energy_points: f32,
    /// Every triggered justification, in factor order
    pub reasons: Vec<String>,
}

impl MoodFeatures {
    /// Create a new MoodFeatures with zero points.
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            rating_points: 0.0,
            genre_points: 0.0,
            time_points: 0.0,
            complexity_points: 0.0,
            energy_points: 0.0,
            reasons: Vec::new(),
        }
    }

    pub fn total(&self) -> f32 {
        self.rating_points
            + self.genre_points
            + self.time_points
            + self.complexity_points
            + self.energy_points
    }

    /// The first reasons joined for display
    pub fn reason(&self) -> String {
        self.reasons
            .iter()
            .take(MAX_REASONS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(REASON_SEPARATOR)
    }
}

/// Score all candidates in parallel.
///
/// Output is in the same order as `candidates`.
pub fn score_candidates(candidates: &[&Movie], profile: &MoodProfile) -> Vec<MoodFeatures> {
    candidates
        .par_iter()
        .map(|movie| score_movie(movie, profile))
        .collect()
}

/// Score a single movie against a mood profile.
pub fn score_movie(movie: &Movie, profile: &MoodProfile) -> MoodFeatures {
    let mut features = MoodFeatures::new(movie.id);
    let first_genre = movie.primary_genre().map(|genre| genre.as_str()).unwrap_or("pick");

    features.rating_points = (movie.rating / 10.0) * RATING_POINTS;

    let genre_matches = count_in(&movie.genres, &profile.preferred_genres);
    if genre_matches > 0 {
        features.genre_points = (genre_matches as f32 / movie.genres.len() as f32) * GENRE_POINTS;
        features.reasons.push(format!(
            "Perfect {} for {} mood",
            first_genre, profile.primary_emotion
        ));
    }

    let time_matches = count_in(&movie.genres, &profile.time_genres);
    if time_matches > 0 {
        features.time_points = time_matches as f32 * TIME_POINTS_PER_GENRE;
        features.reasons.push("Great for this time of day".to_string());
    }

    if movie.complexity == profile.complexity {
        features.complexity_points = COMPLEXITY_MATCH_POINTS;
        match profile.complexity {
            Complexity::Low => features.reasons.push("Easy to follow".to_string()),
            Complexity::High => features.reasons.push("Intellectually engaging".to_string()),
            Complexity::Medium => {}
        }
    }

    if profile.energy_level == EnergyLevel::Low && movie.complexity == Complexity::Low {
        features.energy_points = ENERGY_POINTS;
        features.reasons.push("Perfect for relaxing".to_string());
    } else if profile.energy_level == EnergyLevel::High && movie.has_genre(Genre::Action) {
        features.energy_points = ENERGY_POINTS;
        features.reasons.push("High-energy entertainment".to_string());
    }

    if features.reasons.is_empty() {
        features.reasons.push(format!("Highly rated {}", first_genre));
    }

    features
}

/// How many of `genres` appear in `wanted`
fn count_in(genres: &[Genre], wanted: &[Genre]) -> usize {
    genres.iter().filter(|genre| wanted.contains(genre)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood::{Emotion, TimeOfDay};

    fn movie(rating: f32, genres: Vec<Genre>, complexity: Complexity) -> Movie {
        Movie {
            id: 1,
            title: "Test Movie".to_string(),
            year: 2000,
            genres,
            rating,
            runtime: 120,
            complexity,
        }
    }

    fn profile(
        complexity: Complexity,
        energy_level: EnergyLevel,
        preferred_genres: Vec<Genre>,
        time_genres: Vec<Genre>,
    ) -> MoodProfile {
        MoodProfile {
            primary_emotion: Emotion::Curious,
            secondary_emotions: Vec::new(),
            energy_level,
            complexity,
            preferred_genres,
            time_of_day: TimeOfDay::Afternoon,
            time_genres,
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_genre_and_complexity_match() {
        let movie = movie(9.0, vec![Genre::Drama], Complexity::High);
        let profile = profile(
            Complexity::High,
            EnergyLevel::Medium,
            vec![Genre::Documentary, Genre::Drama],
            Vec::new(),
        );

        let features = score_movie(&movie, &profile);

        assert_eq!(features.rating_points, 45.0);
        assert_eq!(features.genre_points, 30.0);
        assert_eq!(features.complexity_points, 15.0);
        assert_eq!(features.total(), 90.0);
        assert_eq!(
            features.reason(),
            "Perfect Drama for curious mood • Intellectually engaging"
        );
    }

    #[test]
    fn test_partial_genre_overlap() {
        let movie = movie(5.0, vec![Genre::Action, Genre::Crime, Genre::Drama], Complexity::Medium);
        let profile = profile(Complexity::Low, EnergyLevel::Medium, vec![Genre::Drama], Vec::new());

        let features = score_movie(&movie, &profile);
        assert!((features.genre_points - 10.0).abs() < 1e-4);
        assert_eq!(features.total(), 25.0 + features.genre_points);
    }

    #[test]
    fn test_time_bonus_per_matching_genre() {
        let movie = movie(6.0, vec![Genre::Horror, Genre::Thriller], Complexity::Medium);
        let profile = profile(
            Complexity::Low,
            EnergyLevel::Medium,
            Vec::new(),
            vec![Genre::Horror, Genre::Thriller, Genre::Mystery],
        );

        let features = score_movie(&movie, &profile);
        assert_eq!(features.time_points, 10.0);
        assert_eq!(features.reason(), "Great for this time of day");
    }

    #[test]
    fn test_low_energy_low_complexity_relaxing() {
        let movie = movie(8.0, vec![Genre::Animation], Complexity::Low);
        let profile = profile(Complexity::Low, EnergyLevel::Low, Vec::new(), Vec::new());

        let features = score_movie(&movie, &profile);
        assert_eq!(features.energy_points, 10.0);
        assert_eq!(features.reason(), "Easy to follow • Perfect for relaxing");
    }

    #[test]
    fn test_high_energy_action() {
        let movie = movie(7.0, vec![Genre::Comedy, Genre::Action], Complexity::Medium);
        let profile = profile(Complexity::Medium, EnergyLevel::High, Vec::new(), Vec::new());

        let features = score_movie(&movie, &profile);
        // medium complexity match scores but adds no reason
        assert_eq!(features.complexity_points, 15.0);
        assert_eq!(features.energy_points, 10.0);
        assert_eq!(features.reason(), "High-energy entertainment");
    }

    #[test]
    fn test_low_energy_action_gets_one_energy_bonus() {
        let movie = movie(7.0, vec![Genre::Action], Complexity::Low);
        let profile = profile(Complexity::High, EnergyLevel::Low, Vec::new(), Vec::new());

        let features = score_movie(&movie, &profile);
        assert_eq!(features.energy_points, 10.0);
        assert_eq!(features.reasons, vec!["Perfect for relaxing".to_string()]);
        assert_eq!(features.total(), 45.0);
    }

    #[test]
    fn test_fallback_reason_uses_primary_genre() {
        let movie = movie(6.0, vec![Genre::Documentary, Genre::History], Complexity::Medium);
        let profile = profile(Complexity::High, EnergyLevel::Medium, Vec::new(), Vec::new());

        let features = score_movie(&movie, &profile);
        assert_eq!(features.reason(), "Highly rated Documentary");
    }

    #[test]
    fn test_only_two_reasons_shown() {
        let movie = movie(10.0, vec![Genre::Animation], Complexity::Low);
        let profile = profile(
            Complexity::Low,
            EnergyLevel::Low,
            vec![Genre::Animation],
            vec![Genre::Animation],
        );

        let features = score_movie(&movie, &profile);
        assert_eq!(features.reasons.len(), 4);
        assert_eq!(
            features.reason(),
            "Perfect Animation for curious mood • Great for this time of day"
        );
        // 50 + 30 + 5 + 15 + 10
        assert_eq!(features.total(), 110.0);
    }

    #[test]
    fn test_fallback_reason() {
        let movie = movie(8.0, vec![Genre::Western, Genre::Drama], Complexity::High);
        let profile = profile(Complexity::Low, EnergyLevel::Medium, Vec::new(), Vec::new());

        let features = score_movie(&movie, &profile);
        assert_eq!(features.total(), 40.0);
        assert_eq!(features.reason(), "Highly rated Western");
    }

    #[test]
    fn test_scoring_is_repeatable() {
        let movie = movie(7.4, vec![Genre::Drama, Genre::Romance], Complexity::Low);
        let profile = profile(
            Complexity::Low,
            EnergyLevel::Low,
            vec![Genre::Romance],
            vec![Genre::Drama],
        );

        let first = score_movie(&movie, &profile);
        let second = score_movie(&movie, &profile);
        assert_eq!(first, second);
        assert_eq!(first.total(), second.total());
    }

    #[test]
    fn test_score_candidates_keeps_order() {
        let movies: Vec<Movie> = (1..=20)
            .map(|id| Movie {
                id,
                ..movie(id as f32 / 2.0, vec![Genre::Drama], Complexity::Medium)
            })
            .collect();
        let refs: Vec<&Movie> = movies.iter().collect();
        let profile = profile(Complexity::Medium, EnergyLevel::Medium, Vec::new(), Vec::new());

        let features = score_candidates(&refs, &profile);
        let ids: Vec<MovieId> = features.iter().map(|f| f.movie_id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
