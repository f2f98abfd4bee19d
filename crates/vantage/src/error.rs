//! Error types for the Vantage library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vantage operations.
#[derive(Debug, Error)]
pub enum VantageError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The model endpoint could not be reached or returned an error status.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The model responded, but the content was unusable.
    #[error("Malformed model response: {0}")]
    ModelMalformed(String),
}

/// Result type alias for Vantage operations.
pub type Result<T> = std::result::Result<T, VantageError>;
