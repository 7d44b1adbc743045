//! Benchmarks for mood scoring
//!
//! Run with: cargo bench --package scoring
//!
//! Scores the built-in sample catalog against a fixed mood profile.

use catalog::{Catalog, Movie};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mood::{MoodAnalyzer, TimeOfDay};
use scoring::filters::ComplexityFilter;
use scoring::{jaccard_similarity, rank_top_n, score_candidates, FilterPipeline};

fn bench_score_catalog(c: &mut Criterion) {
    let catalog = Catalog::sample().expect("Failed to load sample catalog");
    let profile = MoodAnalyzer::new()
        .analyze_at("stressed after work, want something light", TimeOfDay::Evening);
    let candidates: Vec<&Movie> = catalog.movies().iter().collect();

    c.bench_function("score_sample_catalog", |b| {
        b.iter(|| {
            let features = score_candidates(black_box(&candidates), black_box(&profile));
            black_box(features)
        })
    });
}

fn bench_full_mood_request(c: &mut Criterion) {
    let catalog = Catalog::sample().expect("Failed to load sample catalog");
    let analyzer = MoodAnalyzer::new();

    c.bench_function("mood_request_end_to_end", |b| {
        b.iter(|| {
            let profile = analyzer.analyze_at(
                black_box("curious and energetic, something mind-bending"),
                TimeOfDay::Night,
            );
            let pipeline = FilterPipeline::new().add_filter(ComplexityFilter::new(profile.complexity, 5));
            let candidates = pipeline.apply(catalog.movies().iter().collect());
            let ranked = rank_top_n(score_candidates(&candidates, &profile), 5, |f| f.total());
            black_box(ranked)
        })
    });
}

fn bench_similarity_scan(c: &mut Criterion) {
    let catalog = Catalog::sample().expect("Failed to load sample catalog");
    let target = catalog.movies()[0].genres.clone();

    c.bench_function("jaccard_scan_sample_catalog", |b| {
        b.iter(|| {
            let total: f32 = catalog
                .movies()
                .iter()
                .map(|movie| jaccard_similarity(black_box(&target), &movie.genres))
                .sum();
            black_box(total)
        })
    });
}

criterion_group!(
    benches,
    bench_score_catalog,
    bench_full_mood_request,
    bench_similarity_scan
);
criterion_main!(benches);
