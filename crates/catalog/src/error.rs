//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog.
///
/// Every failure carries its cause so the caller can decide between an
/// empty state and a visible error; nothing fails silently.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The catalog file does not exist at the given path
    #[error("catalog file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid JSON array of movie records
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
