//! Mood Analyzer - rule-based text analysis
//!
//! Turns a free-text description ("stressed from exams and tired") into a
//! [`MoodProfile`] the scorer can consume.
//!
//! ## Algorithm
//! 1. Lower-case the text
//! 2. Count keyword hits per emotion, keeping emotions with at least one hit
//! 3. Primary emotion = most hits (earliest in table order on ties),
//!    `bored` when nothing matched
//! 4. Secondary emotions = up to two more, by hits then table order
//! 5. Energy from high/low energy keyword counts
//! 6. Complexity from simplicity/depth keywords, else from energy
//! 7. Preferred genres from the emotion table, deduplicated
//! 8. Time genres from the time-of-day bucket
//!
//! Analysis never fails; missing signal falls back to defaults.

use crate::tables::{
    DEPTH_KEYWORDS, EMOTION_KEYWORDS, HIGH_ENERGY_KEYWORDS, LOW_ENERGY_KEYWORDS,
    SIMPLICITY_KEYWORDS, count_matches, genres_for_emotion, genres_for_time,
};
use crate::types::{Emotion, EnergyLevel, MoodProfile, TimeOfDay};
use catalog::{Complexity, Genre};
use tracing::{debug, instrument};

/// Emotion reported when the text matches no emotion keyword
pub const FALLBACK_EMOTION: Emotion = Emotion::Bored;

/// Analyzes mood from text using keyword matching
#[derive(Debug, Clone, Copy)]
pub struct MoodAnalyzer {
    /// How many secondary emotions to keep
    max_secondary: usize,
}

impl MoodAnalyzer {
    pub fn new() -> Self {
        Self { max_secondary: 2 }
    }

    /// Configure how many secondary emotions to report (default: 2)
    pub fn with_max_secondary(mut self, max: usize) -> Self {
        self.max_secondary = max;
        self
    }

    /// Analyze text against the current local time of day
    pub fn analyze(&self, text: &str) -> MoodProfile {
        self.analyze_at(text, TimeOfDay::now())
    }

    /// Analyze text against an explicit time-of-day bucket
    ///
    /// Deterministic for a given input, which is what tests rely on.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn analyze_at(&self, text: &str, time_of_day: TimeOfDay) -> MoodProfile {
        let text_lower = text.to_lowercase();

        let emotion_scores = score_emotions(&text_lower);
        let primary_emotion = pick_primary(&emotion_scores);
        let secondary_emotions =
            rank_secondary(&emotion_scores, primary_emotion, self.max_secondary);

        let energy_level = detect_energy(&text_lower);
        let complexity = detect_complexity(&text_lower, energy_level);
        let preferred_genres = collect_preferred_genres(primary_emotion, &secondary_emotions);

        debug!(
            "Mood: primary={}, secondary={:?}, energy={}, complexity={}",
            primary_emotion, secondary_emotions, energy_level, complexity
        );

        MoodProfile {
            primary_emotion,
            secondary_emotions,
            energy_level,
            complexity,
            preferred_genres,
            time_of_day,
            time_genres: genres_for_time(time_of_day).to_vec(),
            raw_text: text.to_string(),
        }
    }
}

impl Default for MoodAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword hit count per emotion, in table order, zero-hit emotions dropped
fn score_emotions(text: &str) -> Vec<(Emotion, usize)> {
    EMOTION_KEYWORDS
        .iter()
        .map(|(emotion, keywords)| (*emotion, count_matches(text, keywords)))
        .filter(|&(_, hits)| hits > 0)
        .collect()
}

fn pick_primary(scores: &[(Emotion, usize)]) -> Emotion {
    let mut best: Option<(Emotion, usize)> = None;
    for &(emotion, hits) in scores {
        // Strictly greater keeps the earliest emotion on ties
        if best.is_none_or(|(_, best_hits)| hits > best_hits) {
            best = Some((emotion, hits));
        }
    }
    best.map_or(FALLBACK_EMOTION, |(emotion, _)| emotion)
}

fn rank_secondary(scores: &[(Emotion, usize)], primary: Emotion, max: usize) -> Vec<Emotion> {
    let mut others: Vec<(Emotion, usize)> = scores
        .iter()
        .copied()
        .filter(|&(emotion, _)| emotion != primary)
        .collect();
    // Stable sort: equal counts stay in table order
    others.sort_by(|a, b| b.1.cmp(&a.1));
    others.into_iter().take(max).map(|(emotion, _)| emotion).collect()
}

fn detect_energy(text: &str) -> EnergyLevel {
    let high_count = count_matches(text, HIGH_ENERGY_KEYWORDS);
    let low_count = count_matches(text, LOW_ENERGY_KEYWORDS);

    if high_count > low_count {
        EnergyLevel::High
    } else if low_count > high_count {
        EnergyLevel::Low
    } else {
        EnergyLevel::Medium
    }
}

fn detect_complexity(text: &str, energy_level: EnergyLevel) -> Complexity {
    if count_matches(text, SIMPLICITY_KEYWORDS) > 0 {
        Complexity::Low
    } else if count_matches(text, DEPTH_KEYWORDS) > 0 {
        Complexity::High
    } else {
        match energy_level {
            EnergyLevel::Low => Complexity::Low,
            EnergyLevel::Medium | EnergyLevel::High => Complexity::Medium,
        }
    }
}

/// Primary genres first, then each secondary emotion's, first occurrence wins
fn collect_preferred_genres(primary: Emotion, secondary: &[Emotion]) -> Vec<Genre> {
    let mut genres: Vec<Genre> = Vec::new();
    let lists = std::iter::once(primary)
        .chain(secondary.iter().copied())
        .map(genres_for_emotion);
    for genre in lists.flatten() {
        if !genres.contains(genre) {
            genres.push(*genre);
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> MoodProfile {
        MoodAnalyzer::new().analyze_at(text, TimeOfDay::Afternoon)
    }

    #[test]
    fn test_stressed_and_tired() {
        let profile = analyze("I'm stressed from exams and tired");

        assert_eq!(profile.primary_emotion, Emotion::Stressed);
        assert_eq!(profile.secondary_emotions, vec![Emotion::Tired]);
        assert_eq!(profile.energy_level, EnergyLevel::Low);
        assert_eq!(profile.complexity, Complexity::Low);
        assert_eq!(
            profile.preferred_genres,
            vec![
                Genre::Comedy,
                Genre::Animation,
                Genre::Family,
                Genre::Documentary,
                Genre::LightDrama
            ]
        );
    }

    #[test]
    fn test_no_keywords_falls_back() {
        let profile = analyze("");

        assert_eq!(profile.primary_emotion, Emotion::Bored);
        assert!(profile.secondary_emotions.is_empty());
        assert_eq!(profile.energy_level, EnergyLevel::Medium);
        assert_eq!(profile.complexity, Complexity::Medium);
        assert_eq!(profile.preferred_genres, genres_for_emotion(Emotion::Bored));
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(analyze("SO SCARED").primary_emotion, Emotion::Scared);
    }

    #[test]
    fn test_more_hits_wins() {
        // lonely: alone + lonely; romantic: love
        let profile = analyze("lonely and alone, I just want love");
        assert_eq!(profile.primary_emotion, Emotion::Lonely);
        assert_eq!(profile.secondary_emotions, vec![Emotion::Romantic]);
    }

    #[test]
    fn test_tie_goes_to_table_order() {
        // one hit each: sad comes before scared in the table
        let profile = analyze("sad and scared");
        assert_eq!(profile.primary_emotion, Emotion::Sad);
        assert_eq!(profile.secondary_emotions, vec![Emotion::Scared]);
    }

    #[test]
    fn test_secondary_capped_and_ranked() {
        // nervous+uneasy+panic -> anxious 3, scared 2 (afraid, fear), curious 1, happy 1 (glad)
        let profile = analyze("nervous, uneasy, panic; afraid of fear, curious, glad");
        assert_eq!(profile.primary_emotion, Emotion::Anxious);
        assert_eq!(
            profile.secondary_emotions,
            vec![Emotion::Scared, Emotion::Happy]
        );
    }

    #[test]
    fn test_max_secondary_is_configurable() {
        let profile = MoodAnalyzer::new()
            .with_max_secondary(0)
            .analyze_at("sad and scared", TimeOfDay::Night);
        assert!(profile.secondary_emotions.is_empty());
    }

    #[test]
    fn test_energy_levels() {
        assert_eq!(analyze("feeling energetic and hyper").energy_level, EnergyLevel::High);
        assert_eq!(analyze("lazy sunday").energy_level, EnergyLevel::Low);
        assert_eq!(analyze("pumped but exhausted").energy_level, EnergyLevel::Medium);
    }

    #[test]
    fn test_simplicity_beats_depth() {
        let profile = analyze("something light but deep");
        assert_eq!(profile.complexity, Complexity::Low);
    }

    #[test]
    fn test_depth_keyword_gives_high_complexity() {
        assert_eq!(analyze("want something intellectual").complexity, Complexity::High);
    }

    #[test]
    fn test_high_energy_gives_medium_complexity() {
        assert_eq!(analyze("so energetic today").complexity, Complexity::Medium);
    }

    #[test]
    fn test_preferred_genres_have_no_duplicates() {
        let inputs = [
            "happy sad angry stressed anxious bored excited lonely",
            "tired motivated romantic scared curious nostalgic adventure",
            "excited adventure journey thrilled",
            "",
        ];
        for text in inputs {
            let genres = analyze(text).preferred_genres;
            for (i, genre) in genres.iter().enumerate() {
                assert!(
                    !genres[i + 1..].contains(genre),
                    "duplicate {genre} for {text:?}"
                );
            }
        }
    }

    #[test]
    fn test_time_genres_follow_bucket() {
        let profile = MoodAnalyzer::new().analyze_at("happy", TimeOfDay::Night);
        assert_eq!(profile.time_of_day, TimeOfDay::Night);
        assert_eq!(profile.time_genres, genres_for_time(TimeOfDay::Night));
    }

    #[test]
    fn test_raw_text_is_kept() {
        let profile = analyze("Feeling Nostalgic");
        assert_eq!(profile.raw_text, "Feeling Nostalgic");
        assert_eq!(profile.primary_emotion, Emotion::Nostalgic);
    }
}
