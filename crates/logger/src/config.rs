//! Logger and file sink configuration

use crate::Severity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for a [`Logger`](crate::Logger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity forwarded to the sink
    pub threshold: Severity,
    /// Attach the caller's file and line to every record
    pub caller_location: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            caller_location: false,
        }
    }
}

/// How a file-backed [`StreamSink`](crate::StreamSink) opens its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSinkConfig {
    path: PathBuf,
    append: bool,
    create_dirs: bool,
}

impl FileSinkConfig {
    /// Truncate-on-open configuration for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append: false,
            create_dirs: false,
        }
    }

    /// Keep existing contents and write at the end of the file
    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Create missing parent directories before opening
    #[must_use]
    pub fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Path of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is opened for appending
    #[must_use]
    pub const fn is_append(&self) -> bool {
        self.append
    }

    /// Whether parent directories are created
    #[must_use]
    pub const fn is_create_dirs(&self) -> bool {
        self.create_dirs
    }
}
