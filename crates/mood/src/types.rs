//! Types produced by mood inference.

use catalog::{Complexity, Genre};
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of emotions the analyzer can detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Stressed,
    Anxious,
    Bored,
    Excited,
    Lonely,
    Tired,
    Motivated,
    Romantic,
    Scared,
    Curious,
    Nostalgic,
    Adventurous,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Stressed => "stressed",
            Emotion::Anxious => "anxious",
            Emotion::Bored => "bored",
            Emotion::Excited => "excited",
            Emotion::Lonely => "lonely",
            Emotion::Tired => "tired",
            Emotion::Motivated => "motivated",
            Emotion::Romantic => "romantic",
            Emotion::Scared => "scared",
            Emotion::Curious => "curious",
            Emotion::Nostalgic => "nostalgic",
            Emotion::Adventurous => "adventurous",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        })
    }
}

/// Wall-clock bucket used to pick time-of-day genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00 - 11:59
    Morning,
    /// 12:00 - 16:59
    Afternoon,
    /// 17:00 - 21:59
    Evening,
    /// 22:00 - 04:59
    Night,
}

impl TimeOfDay {
    /// Bucket for an hour of the day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Bucket for the current local time
    pub fn now() -> Self {
        Self::from_hour(Local::now().hour())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        })
    }
}

/// Structured result of analyzing a free-text mood description.
///
/// Built fresh for every query and never mutated by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodProfile {
    pub primary_emotion: Emotion,
    /// Up to two further emotions, strongest first
    pub secondary_emotions: Vec<Emotion>,
    pub energy_level: EnergyLevel,
    pub complexity: Complexity,
    /// Genres for the primary then secondary emotions, without duplicates
    pub preferred_genres: Vec<Genre>,
    pub time_of_day: TimeOfDay,
    pub time_genres: Vec<Genre>,
    /// Original input, kept for display only
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_emotion_serializes_lowercase() {
        let json = serde_json::to_string(&Emotion::Adventurous).unwrap();
        assert_eq!(json, "\"adventurous\"");
        assert_eq!(Emotion::Stressed.to_string(), "stressed");
    }
}
