//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - `#[from]` conversions so `?` works across I/O and JSON boundaries

use thiserror::Error;

/// Errors that can occur while loading, validating, or encoding catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    ///
    /// Stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its closed set (unknown genre, bad complexity)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two catalog entries share an id
    #[error("Duplicate movie id {id}")]
    DuplicateMovie { id: u32 },

    /// A movie violates a record invariant
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Watch history could not be encoded or decoded
    #[error("History codec error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
