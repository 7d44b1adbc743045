//! Engine behavior over the sample catalog, including requests running in
//! parallel with a catalog swap.

use std::sync::Arc;
use std::thread;

use catalog::{Catalog, Genre, WatchHistory};
use engine::{EngineError, RecommendationEngine};
use mood::{Emotion, EnergyLevel, TimeOfDay};

fn sample_engine() -> RecommendationEngine {
    RecommendationEngine::new(Catalog::sample().expect("sample catalog should load"))
}

#[test]
fn test_stressed_and_tired_request() {
    let engine = sample_engine();
    let profile = engine.analyze_at("I'm stressed from exams and tired", TimeOfDay::Evening);

    assert_eq!(profile.primary_emotion, Emotion::Stressed);
    assert_eq!(profile.energy_level, EnergyLevel::Low);

    let recs = engine.mood_recommendations(&profile, 5);
    assert_eq!(recs.len(), 5);
    for pair in recs.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(recs.iter().all(|r| !r.reason.is_empty()));
}

#[test]
fn test_recommend_for_text_returns_profile() {
    let engine = sample_engine();
    let (profile, recs) = engine.recommend_for_text("nothing in particular", 3);

    assert_eq!(profile.primary_emotion, Emotion::Bored);
    assert_eq!(recs.len(), 3);
}

#[test]
fn test_limit_larger_than_catalog() {
    let engine = sample_engine();
    let total = engine.catalog().len();

    assert_eq!(engine.genre_recommendations(&[], total + 10).len(), total);
    assert_eq!(engine.similar_movies(1, total + 10).len(), total - 1);
}

#[test]
fn test_genre_reason_quotes_first_two_favorites() {
    let engine = sample_engine();
    let recs = engine.genre_recommendations(&[Genre::Horror, Genre::Thriller, Genre::Mystery], 5);

    assert_eq!(recs.len(), 5);
    assert!(recs.iter().all(|r| r.reason == "Matches your taste in Horror, Thriller"));
}

#[test]
fn test_requests_during_catalog_swap() {
    let engine = Arc::new(sample_engine());
    let original_len = engine.catalog().len();

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..20 {
                    let recs = engine.similar_movies(1 + i, 5);
                    assert!(recs.len() <= 5);
                }
            })
        })
        .collect();

    let smaller = Catalog::from_movies(engine.catalog().movies()[..10].to_vec())
        .expect("subset of a valid catalog is valid");
    engine.replace_catalog(smaller);

    for worker in workers {
        worker.join().expect("worker thread panicked");
    }

    assert_eq!(original_len, 50);
    assert_eq!(engine.catalog().len(), 10);
}

#[test]
fn test_watch_history_round_trip() {
    let engine = sample_engine();
    let mut history = WatchHistory::new();
    let profile = engine.analyze_at("feeling romantic tonight", TimeOfDay::Night);

    engine
        .mark_watched(6, Some(&profile), &mut history)
        .expect("movie 6 is in the sample");
    assert!(matches!(
        engine.mark_watched(5000, None, &mut history),
        Err(EngineError::MovieNotFound { id: 5000 })
    ));

    let json = history.to_json().expect("history encodes");
    let restored = WatchHistory::from_json(&json).expect("history decodes");
    assert_eq!(restored, history);
    assert_eq!(restored.entries()[0].title, "The Notebook");
}
