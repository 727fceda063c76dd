//! Error types for the data-loader crate.
//!
//! Only whole-document failures are errors here. A record whose fields have
//! an unexpected shape still decodes (see `parser`), so the variants below
//! describe a snapshot that could not be read or was not a JSON array at all.

use thiserror::Error;

/// Errors that can occur while loading a JSON snapshot
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document was not valid JSON, or its top level was not an array
    #[error("Invalid JSON in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Remote fetch failed (connection error or non-success status)
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
