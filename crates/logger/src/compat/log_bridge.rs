//! Bridge from the `log` crate

use crate::{Location, Logger, Severity};
use log::{LevelFilter, Log, Metadata, Record as LogRecord};
use std::borrow::Cow;

/// Implements [`log::Log`] by forwarding to a [`Logger`]
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Create a new log bridge
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Most verbose `log` level that can pass the logger's threshold
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        match self.logger.threshold() {
            Some(Severity::Info) => LevelFilter::Trace,
            Some(Severity::Warning) => LevelFilter::Warn,
            Some(Severity::Error) => LevelFilter::Error,
            Some(Severity::Fatal) | None => LevelFilter::Off,
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger.is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord<'_>) {
        let severity = map_level(record.level());
        if !self.logger.is_enabled(severity) {
            return;
        }

        self.logger
            .log_at(severity, Some(location_of(record)), || record.args().to_string());
    }

    fn flush(&self) {}
}

/// `log` has no fatal level; everything below `Warn` collapses into INFO.
const fn map_level(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
    }
}

fn location_of(record: &LogRecord<'_>) -> Location {
    let mut location = Location::new();

    let package = record
        .module_path_static()
        .map(Cow::Borrowed)
        .or_else(|| record.module_path().map(|p| Cow::Owned(p.to_string())));
    if let Some(package) = package {
        location = location.with_package(package);
    }

    let file = record
        .file_static()
        .map(Cow::Borrowed)
        .or_else(|| record.file().map(|f| Cow::Owned(f.to_string())));
    if let Some(file) = file {
        location = location.with_file(file);
    }

    if let Some(line) = record.line() {
        location = location.with_line(line);
    }
    location
}

/// Route the `log` crate's macros into `logger`.
///
/// # Errors
///
/// Fails if a global `log` logger is already installed.
///
/// # Example
/// ```no_run
/// use leveled_logger::{Logger, Severity, StreamSink, compat::init_log_bridge};
/// use std::sync::Arc;
///
/// let logger = Logger::new(Arc::new(StreamSink::stderr()), Severity::Warning);
/// init_log_bridge(logger).expect("Failed to set log bridge");
/// ```
pub fn init_log_bridge(logger: Logger) -> Result<(), log::SetLoggerError> {
    let bridge = LogBridge::new(logger);
    let max_level = bridge.max_level();

    // `log::set_logger` needs a 'static reference
    log::set_logger(Box::leak(Box::new(bridge)))?;
    log::set_max_level(max_level);
    Ok(())
}
