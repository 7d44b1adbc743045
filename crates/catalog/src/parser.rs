//! Parser for catalog files.
//!
//! Format of `movies.dat`, one movie per line:
//!
//! ```text
//! id::title::year::genres::rating::runtime::complexity
//! 4::Inception::2010::Action|Sci-Fi|Thriller::8.8::148::high
//! ```
//!
//! Genres are pipe-separated. The complexity field may be left empty, in
//! which case it is derived from the primary genre.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::path::Path;

const FIELD_COUNT: usize = 7;

/// Parse a `movies.dat` file from disk
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = std::fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_movies_str(&content, &file)
}

/// Parse catalog lines already in memory
///
/// `file` is only used to label parse errors.
pub fn parse_movies_str(content: &str, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }

        let parts: Vec<&str> = line_trimmed.split("::").collect();
        if parts.len() != FIELD_COUNT {
            return Err(CatalogError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let parse_error = |reason: String| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason,
        };

        let id: MovieId = parts[0]
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("Invalid movieId: {}", e)))?;

        let title = parts[1].trim();
        if title.is_empty() {
            return Err(parse_error("Missing title".to_string()));
        }

        let year: u16 = parts[2]
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("Invalid year: {}", e)))?;

        let genres = parse_genres(parts[3]).map_err(|e| parse_error(e.to_string()))?;

        let rating: f32 = parts[4]
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("Invalid rating: {}", e)))?;

        let runtime: u16 = parts[5]
            .trim()
            .parse()
            .map_err(|e| parse_error(format!("Invalid runtime: {}", e)))?;

        let complexity = match parts[6].trim() {
            "" => Complexity::for_genre(genres[0]),
            value => value
                .parse::<Complexity>()
                .map_err(|e| parse_error(e.to_string()))?,
        };

        movies.push(Movie {
            id,
            title: title.to_string(),
            year,
            genres,
            rating,
            runtime,
            complexity,
        });
    }

    Ok(movies)
}

/// Parse pipe-separated genres
///
/// Example: "Action|Adventure|Sci-Fi" -> vec![Genre::Action, Genre::Adventure, Genre::SciFi]
fn parse_genres(s: &str) -> Result<Vec<Genre>> {
    let genres = s
        .split('|')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse::<Genre>)
        .collect::<Result<Vec<_>>>()?;

    if genres.is_empty() {
        return Err(CatalogError::ValidationError(
            "movie must have at least one genre".to_string(),
        ));
    }
    Ok(genres)
}
