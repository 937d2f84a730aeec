//! Error types for the logger

use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing loggers and sinks.
///
/// Writing a record never produces an error value: output is best-effort.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log destination could not be opened or created
    #[error("Failed to open log destination {path}: {source}")]
    Open {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to create the directory holding the log file
    #[error("Failed to create log directory at {path}: {source}")]
    CreateDirectory {
        /// The path that failed to be created
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Unknown severity name
    #[error("Unknown severity: {0:?}")]
    ParseSeverity(String),
}
