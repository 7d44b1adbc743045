mod display;

use anyhow::{Context, Result, anyhow};
use catalog::{BrowseQuery, BrowseSort, Catalog, Genre, MovieId, WatchHistory};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::RecommendationEngine;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

const DEFAULT_HISTORY_FILE: &str = "watch_history.json";

/// Mood texts the benchmark picks from at random
const BENCHMARK_MOODS: &[&str] = &[
    "I'm stressed from exams and tired",
    "feeling happy and excited, want something fun",
    "lonely tonight after a breakup",
    "curious about something deep and mind-bending",
    "bored, nothing to do",
    "nostalgic for my childhood",
    "pumped and energetic, ready for adventure",
    "scared but in the mood for a thrill",
];

/// CineMatch - mood-based movie recommendations
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(about = "Recommend movies from how you feel right now", long_about = None)]
struct Cli {
    /// Path to a movies.dat catalog (defaults to the built-in sample)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies for a free-text mood description
    Mood {
        /// How you feel, e.g. "stressed from exams and tired"
        #[arg(long)]
        text: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Recommend movies for favorite genres
    Genres {
        /// Favorite genre (repeatable); none means top rated overall
        #[arg(long = "genre")]
        genres: Vec<Genre>,

        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Find movies similar to a given movie
    Similar {
        #[arg(long)]
        movie_id: MovieId,

        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Browse the catalog with filters
    Browse {
        /// Genre to include (repeatable); a movie matches if it has any of them
        #[arg(long = "genre")]
        genres: Vec<Genre>,

        #[arg(long)]
        year_min: Option<u16>,

        #[arg(long)]
        year_max: Option<u16>,

        #[arg(long)]
        min_rating: Option<f32>,

        #[arg(long, value_enum, default_value_t = SortKey::Rating)]
        sort: SortKey,
    },

    /// List every genre present in the catalog
    ListGenres,

    /// Mark a movie as watched in the history file
    Watch {
        #[arg(long)]
        movie_id: MovieId,

        /// How you felt when picking it; stored with the entry
        #[arg(long)]
        mood: Option<String>,

        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history: PathBuf,
    },

    /// Show watch statistics from the history file
    Stats {
        #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
        history: PathBuf,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    Rating,
    RatingAsc,
    Newest,
    Oldest,
    Title,
}

impl From<SortKey> for BrowseSort {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Rating => BrowseSort::RatingDesc,
            SortKey::RatingAsc => BrowseSort::RatingAsc,
            SortKey::Newest => BrowseSort::YearNewest,
            SortKey::Oldest => BrowseSort::YearOldest,
            SortKey::Title => BrowseSort::Title,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let engine = load_engine(cli.catalog.as_deref())?;
    info!("Catalog ready: {} movies in {:?}", engine.catalog().len(), start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Mood {
            text,
            limit,
            explain,
        } => handle_mood(&engine, &text, limit, explain),
        Commands::Genres { genres, limit } => handle_genres(&engine, &genres, limit),
        Commands::Similar { movie_id, limit } => handle_similar(&engine, movie_id, limit)?,
        Commands::Search { title } => handle_search(&engine, &title),
        Commands::Browse {
            genres,
            year_min,
            year_max,
            min_rating,
            sort,
        } => handle_browse(
            &engine,
            BrowseQuery {
                genres,
                year_min,
                year_max,
                min_rating,
                sort: sort.into(),
            },
        ),
        Commands::ListGenres => handle_list_genres(&engine),
        Commands::Watch {
            movie_id,
            mood,
            history,
        } => handle_watch(&engine, movie_id, mood.as_deref(), &history)?,
        Commands::Stats { history } => handle_stats(&engine, &history)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(engine, requests, concurrent).await?,
    }

    Ok(())
}

fn load_engine(path: Option<&Path>) -> Result<RecommendationEngine> {
    match path {
        Some(path) => RecommendationEngine::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            let catalog = Catalog::sample().context("Failed to load the built-in sample catalog")?;
            Ok(RecommendationEngine::new(catalog))
        }
    }
}

/// Read a history file; a missing file is an empty history
fn load_history(path: &Path) -> Result<WatchHistory> {
    if !path.exists() {
        return Ok(WatchHistory::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history from {}", path.display()))?;
    WatchHistory::from_json(&json)
        .with_context(|| format!("Failed to parse history in {}", path.display()))
}

/// Handle the 'mood' command
fn handle_mood(engine: &RecommendationEngine, text: &str, limit: usize, explain: bool) {
    let (profile, recommendations) = engine.recommend_for_text(text, limit);
    display::print_profile(&profile);
    display::print_recommendations("Movies for your mood:", &recommendations, explain);
}

/// Handle the 'genres' command
fn handle_genres(engine: &RecommendationEngine, genres: &[Genre], limit: usize) {
    let recommendations = engine.genre_recommendations(genres, limit);
    display::print_recommendations("Picks for your favorite genres:", &recommendations, false);
}

/// Handle the 'similar' command
fn handle_similar(engine: &RecommendationEngine, movie_id: MovieId, limit: usize) -> Result<()> {
    let catalog = engine.catalog();
    let target = catalog
        .get_movie(movie_id)
        .ok_or_else(|| anyhow!("Movie {} not found", movie_id))?;

    let recommendations = engine.similar_movies(movie_id, limit);
    display::print_recommendations(
        &format!("More like {}:", target.title),
        &recommendations,
        false,
    );
    Ok(())
}

/// Handle the 'search' command
fn handle_search(engine: &RecommendationEngine, title: &str) {
    let catalog = engine.catalog();
    let matches = catalog.search_by_title(title);
    display::print_movies(&format!("Search results for '{}':", title), matches);
}

/// Handle the 'browse' command
fn handle_browse(engine: &RecommendationEngine, query: BrowseQuery) {
    let catalog = engine.catalog();
    let movies = catalog.browse(&query);
    display::print_movies(&format!("{} movies:", movies.len()), movies);
}

/// Handle the 'list-genres' command
fn handle_list_genres(engine: &RecommendationEngine) {
    let catalog = engine.catalog();
    println!("{}", "Genres:".bold().blue());
    for genre in catalog.all_genres() {
        println!(
            "{}{} ({} movies)",
            "• ".green(),
            genre,
            catalog.movies_by_genre(genre).len()
        );
    }
}

/// Handle the 'watch' command
fn handle_watch(
    engine: &RecommendationEngine,
    movie_id: MovieId,
    mood_text: Option<&str>,
    history_path: &Path,
) -> Result<()> {
    let mut history = load_history(history_path)?;
    let profile = mood_text.map(|text| engine.analyze(text));

    let movie = engine.mark_watched(movie_id, profile.as_ref(), &mut history)?;

    let json = history.to_json().context("Failed to encode history")?;
    std::fs::write(history_path, json)
        .with_context(|| format!("Failed to write history to {}", history_path.display()))?;

    println!(
        "{} Marked {} as watched ({} in history)",
        "✓".green(),
        movie.title.bold(),
        history.len()
    );
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(engine: &RecommendationEngine, history_path: &Path) -> Result<()> {
    let history = load_history(history_path)?;
    if history.is_empty() {
        println!("No movies watched yet.");
        return Ok(());
    }

    let stats = history.stats(&engine.catalog());
    println!("{}", "Watch stats:".bold().blue());
    println!("{}Movies watched: {}", "• ".green(), stats.movies_watched);
    println!("{}Watch time: {}h", "• ".green(), stats.total_hours());
    match stats.average_rating {
        Some(avg) => println!("{}Average rating: {:.1}", "• ".green(), avg),
        None => println!("{}Average rating: n/a", "• ".green()),
    }
    if let Some(genre) = stats.favorite_genre {
        println!("{}Favorite genre: {}", "• ".green(), genre);
    }
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Mood requests run as blocking tasks against one shared engine, with at
/// most `concurrent` in flight.
async fn handle_benchmark(engine: RecommendationEngine, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }
    let limiter = Arc::new(Semaphore::new(concurrent.max(1)));

    let wall_start = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let text = BENCHMARK_MOODS[rand::random::<u32>() as usize % BENCHMARK_MOODS.len()];
        let engine = engine.clone();
        let permit = Arc::clone(&limiter)
            .acquire_owned()
            .await
            .context("Benchmark limiter closed")?;
        handles.push(tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let (_, recommendations) = engine.recommend_for_text(text, 5);
            drop(permit);
            (start.elapsed(), recommendations.len())
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        let (elapsed, _) = handle.await.context("Benchmark task panicked")?;
        timings.push(elapsed);
    }
    let wall_time = wall_start.elapsed();

    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg_latency = total / timings.len() as u32;
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}
