//! Sink writing newline-terminated lines to a byte stream

use crate::{Error, FileSinkConfig, Record, Result, Sink, render};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

/// Exit status used when a fatal record terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Sink over any writer (a file, stderr, a socket, an in-memory buffer).
///
/// Each record is written and flushed under one lock, so lines from
/// concurrent callers never interleave. After [`Sink::fail_now`] the writer
/// has been closed and further output is dropped.
#[derive(Debug)]
pub struct StreamSink<W: Write + Send> {
    /// `None` once closed
    writer: Mutex<Option<W>>,
}

impl<W: Write + Send> StreamSink<W> {
    /// Wrap an already-open writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(Some(writer)),
        }
    }

    /// Whether the destination has been closed
    pub fn is_closed(&self) -> bool {
        self.writer.lock().is_none()
    }

    /// Take the writer back, unless the sink was closed
    pub fn into_inner(self) -> Option<W> {
        self.writer.into_inner()
    }

    /// Flush and drop the writer. Errors are ignored: closing happens on the
    /// way to termination and must not stop it.
    fn close(&self) {
        if let Some(mut writer) = self.writer.lock().take() {
            let _ = writer.flush();
        }
    }
}

impl StreamSink<File> {
    /// Create (or truncate) the file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(&FileSinkConfig::new(path.as_ref()))
    }

    /// Open a log file as described by `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] if missing parent directories were
    /// requested and could not be created, or [`Error::Open`] if the file
    /// cannot be opened.
    pub fn open(config: &FileSinkConfig) -> Result<Self> {
        let path = config.path();

        if config.is_create_dirs()
            && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut options = OpenOptions::new();
        if config.is_append() {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options
            .create(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(file))
    }
}

impl StreamSink<Stderr> {
    /// Sink writing to the process's standard error
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamSink<Stdout> {
    /// Sink writing to the process's standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + 'static> Sink for StreamSink<W> {
    fn output(&self, record: &Record) {
        let line = render(record, true);

        let mut guard = self.writer.lock();
        if let Some(writer) = guard.as_mut() {
            // Single attempt; a failed write is not reported to the caller.
            let _ = writer.write_all(line.as_bytes());
            let _ = writer.flush();
        }
    }

    fn fail_now(&self) -> ! {
        self.close();
        std::process::exit(FATAL_EXIT_CODE)
    }
}
