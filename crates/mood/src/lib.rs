//! # Mood Crate
//!
//! Rule-based mood inference: free text in, [`MoodProfile`] out.
//!
//! ## Components
//!
//! - **tables**: immutable keyword and genre lookup tables
//! - **analyzer**: [`MoodAnalyzer`], the keyword-matching inference itself
//! - **types**: emotions, energy levels, time-of-day buckets and the profile
//!
//! ## Example Usage
//!
//! ```ignore
//! use mood::{MoodAnalyzer, TimeOfDay};
//!
//! let analyzer = MoodAnalyzer::new();
//! let profile = analyzer.analyze("I'm stressed from exams and tired");
//! assert_eq!(profile.primary_emotion.as_str(), "stressed");
//!
//! // Pin the clock-dependent part for reproducible output
//! let evening = analyzer.analyze_at("feeling romantic", TimeOfDay::Evening);
//! ```
//!
//! The only source of non-determinism is the wall-clock read in
//! [`MoodAnalyzer::analyze`].

pub mod analyzer;
pub mod tables;
pub mod types;

pub use analyzer::{FALLBACK_EMOTION, MoodAnalyzer};
pub use types::{Emotion, EnergyLevel, MoodProfile, TimeOfDay};
