//! Error types for the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Core conversion errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Input file '{}' NOT found at the given location", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "Invalid file '{}': line {line_number} has {fields} tab-separated column(s), expected {expected}: {line:?}",
        .path.display(),
        expected = crate::row::COLUMN_COUNT
    )]
    MalformedInput {
        path: PathBuf,
        line_number: usize,
        line: String,
        fields: usize,
    },

    #[error("There are no questions and context paragraphs in '{}'", .0.display())]
    EmptyInput(PathBuf),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
