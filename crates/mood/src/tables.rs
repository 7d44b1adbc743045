//! Static lookup tables for rule-based mood inference.
//!
//! All tables are immutable constants. Emotion order in
//! [`EMOTION_KEYWORDS`] is significant: it breaks ties between emotions
//! with the same number of keyword hits.

use crate::types::{Emotion, TimeOfDay};
use catalog::Genre;

/// Emotion to trigger keywords, in tie-break order
pub const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Happy,
        &["happy", "joy", "excited", "great", "amazing", "wonderful", "cheerful", "delighted", "glad"],
    ),
    (
        Emotion::Sad,
        &["sad", "depressed", "down", "unhappy", "miserable", "heartbroken", "gloomy", "blue", "crying"],
    ),
    (
        Emotion::Angry,
        &["angry", "mad", "furious", "annoyed", "irritated", "frustrated", "rage", "upset"],
    ),
    (
        Emotion::Stressed,
        &["stressed", "overwhelmed", "pressure", "tense", "anxious", "worried", "exam", "deadline", "busy"],
    ),
    (
        Emotion::Anxious,
        &["anxious", "nervous", "worried", "uneasy", "restless", "concerned", "panic"],
    ),
    (
        Emotion::Bored,
        &["bored", "boring", "dull", "monotonous", "tedious", "nothing to do", "uninterested"],
    ),
    (
        Emotion::Excited,
        &["excited", "thrilled", "pumped", "energetic", "enthusiastic", "hyped"],
    ),
    (
        Emotion::Lonely,
        &["lonely", "alone", "isolated", "solitary", "breakup", "broke up", "missing"],
    ),
    (
        Emotion::Tired,
        &["tired", "exhausted", "fatigued", "drained", "weary", "sleepy", "worn out"],
    ),
    (
        Emotion::Motivated,
        &["motivated", "inspired", "driven", "ambitious", "determined", "focused"],
    ),
    (
        Emotion::Romantic,
        &["romantic", "love", "relationship", "date", "valentine", "crush"],
    ),
    (
        Emotion::Scared,
        &["scared", "afraid", "frightened", "terrified", "fear"],
    ),
    (
        Emotion::Curious,
        &["curious", "wondering", "interested", "learn", "discover", "explore"],
    ),
    (
        Emotion::Nostalgic,
        &["nostalgic", "memories", "remember", "childhood", "old times", "past"],
    ),
    (
        Emotion::Adventurous,
        &["adventure", "adventurous", "explore", "travel", "journey"],
    ),
];

pub const HIGH_ENERGY_KEYWORDS: &[&str] =
    &["energetic", "excited", "pumped", "active", "hyper", "motivated"];

pub const LOW_ENERGY_KEYWORDS: &[&str] =
    &["tired", "exhausted", "sleepy", "drained", "lazy", "calm", "relaxed"];

/// Any of these forces low complexity
pub const SIMPLICITY_KEYWORDS: &[&str] = &["simple", "easy", "light", "mindless", "brain off"];

/// Any of these forces high complexity, unless a simplicity keyword matched
pub const DEPTH_KEYWORDS: &[&str] = &["complex", "deep", "thought", "intellectual", "mind-bending"];

/// Genres that suit an emotion, most fitting first
pub fn genres_for_emotion(emotion: Emotion) -> &'static [Genre] {
    use Genre::*;
    match emotion {
        Emotion::Happy => &[Comedy, Romance, Animation, Musical, Family],
        Emotion::Sad => &[Drama, Romance, Animation],
        Emotion::Angry => &[Action, Thriller, Crime, War],
        Emotion::Stressed => &[Comedy, Animation, Family, Documentary],
        Emotion::Anxious => &[Comedy, Animation, Romance, FeelGood],
        Emotion::Bored => &[Action, Adventure, SciFi, Fantasy, Mystery],
        Emotion::Excited => &[Action, Adventure, Thriller, SciFi],
        Emotion::Lonely => &[Romance, Drama, Comedy],
        Emotion::Tired => &[Animation, Comedy, LightDrama],
        Emotion::Motivated => &[Biography, Documentary, Drama, Sport],
        Emotion::Romantic => &[Romance, RomanticComedy, Drama],
        Emotion::Scared => &[Horror, Thriller, Mystery],
        Emotion::Curious => &[Documentary, Mystery, SciFi, History],
        Emotion::Nostalgic => &[Classic, Animation, Drama, Period],
        Emotion::Adventurous => &[Adventure, Action, Fantasy, SciFi],
    }
}

pub fn genres_for_time(time_of_day: TimeOfDay) -> &'static [Genre] {
    use Genre::*;
    match time_of_day {
        TimeOfDay::Morning => &[Documentary, Biography, Family, LightComedy],
        TimeOfDay::Afternoon => &[Action, Adventure, Comedy, Drama],
        TimeOfDay::Evening => &[Drama, Thriller, Romance, Mystery],
        TimeOfDay::Night => &[Horror, Thriller, Mystery, SciFi, Psychological],
    }
}

/// Number of keywords from `keywords` occurring in `text`
pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|keyword| text.contains(**keyword)).count()
}
