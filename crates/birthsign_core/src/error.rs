//! Error types for loading birthsign data.

use thiserror::Error;

/// Result type alias using [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;

/// Fatal errors that stop a validation run before any report is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the data file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// File is not a JSON array of birthsign objects.
    #[error("Failed to parse JSON file '{path}': {source}")]
    Parse {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
