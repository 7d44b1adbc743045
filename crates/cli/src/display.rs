//! Formatting helpers for terminal output.
//!
//! Engine scores are uncapped; everything shown to the user as a match
//! percentage goes through [`match_percent`] first.

use catalog::Movie;
use colored::{ColoredString, Colorize};
use engine::Recommendation;
use mood::MoodProfile;

/// Clamp a raw score into a 0-100 match percentage
pub fn match_percent(score: f32) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.clamp(0.0, 100.0).round() as u8
}

/// Tier label for a match percentage
pub fn match_label(percent: u8) -> &'static str {
    match percent {
        90.. => "perfect match",
        75..=89 => "great match",
        60..=74 => "good match",
        40..=59 => "worth a look",
        _ => "wildcard",
    }
}

/// "2h 5m" for 125 minutes, "45m" under an hour
pub fn format_runtime(minutes: u16) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        format!("{}m", mins)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

fn colored_label(percent: u8) -> ColoredString {
    let label = match_label(percent);
    match percent {
        75.. => label.green(),
        40..=74 => label.yellow(),
        _ => label.dimmed(),
    }
}

/// One-line summary of a movie
pub fn movie_line(movie: &Movie) -> String {
    format!(
        "{} ({}) [{}] ★ {:.1} · {} · {}",
        movie.title.bold(),
        movie.year,
        movie.genres_label(),
        movie.rating,
        format_runtime(movie.runtime),
        movie.complexity
    )
}

pub fn print_profile(profile: &MoodProfile) {
    println!("{}", "Mood profile:".bold().blue());
    println!("{}Primary emotion: {}", "• ".green(), profile.primary_emotion);
    if !profile.secondary_emotions.is_empty() {
        let secondary = profile
            .secondary_emotions
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}Also feeling: {}", "• ".green(), secondary);
    }
    println!("{}Energy: {}", "• ".green(), profile.energy_level);
    println!("{}Complexity: {}", "• ".green(), profile.complexity);
    println!("{}Time of day: {}", "• ".green(), profile.time_of_day);
    let genres = profile
        .preferred_genres
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}Suggested genres: {}", "• ".green(), genres);
    println!();
}

/// Print ranked recommendations, optionally with the score breakdown
pub fn print_recommendations(title: &str, recommendations: &[Recommendation], explain: bool) {
    println!("{}", title.bold().blue());
    if recommendations.is_empty() {
        println!("  No movies found.");
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        let percent = match_percent(rec.score);
        println!(
            "{}. {} {}",
            (i + 1).to_string().green(),
            movie_line(&rec.movie),
            format!("{}% {}", percent, colored_label(percent)).italic()
        );
        println!("   {}", rec.reason.cyan());

        if explain {
            match &rec.features {
                Some(f) => println!(
                    "   rating {:.1} + genre {:.1} + time {:.1} + complexity {:.1} + energy {:.1} = {:.1}",
                    f.rating_points,
                    f.genre_points,
                    f.time_points,
                    f.complexity_points,
                    f.energy_points,
                    f.total()
                ),
                None => println!("   score {:.1}", rec.score),
            }
        }
    }
}

/// Print plain movie listings (search, browse)
pub fn print_movies<'a>(title: &str, movies: impl IntoIterator<Item = &'a Movie>) {
    println!("{}", title.bold().blue());
    let mut count = 0;
    for movie in movies {
        count += 1;
        println!("{}: {}", movie.id.to_string().green(), movie_line(movie));
    }
    if count == 0 {
        println!("  No movies found.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(125), "2h 5m");
        assert_eq!(format_runtime(45), "45m");
        assert_eq!(format_runtime(60), "1h 0m");
        assert_eq!(format_runtime(0), "0m");
    }

    #[test]
    fn test_match_percent_clamps() {
        assert_eq!(match_percent(110.0), 100);
        assert_eq!(match_percent(-3.0), 0);
        assert_eq!(match_percent(89.6), 90);
        assert_eq!(match_percent(f32::NAN), 0);
    }

    #[test]
    fn test_match_label_tiers() {
        assert_eq!(match_label(100), "perfect match");
        assert_eq!(match_label(90), "perfect match");
        assert_eq!(match_label(89), "great match");
        assert_eq!(match_label(75), "great match");
        assert_eq!(match_label(60), "good match");
        assert_eq!(match_label(40), "worth a look");
        assert_eq!(match_label(39), "wildcard");
        assert_eq!(match_label(0), "wildcard");
    }
}
