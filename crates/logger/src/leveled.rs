//! Per-severity logging front-end

use crate::{Location, Logger, Severity, StreamSink};
use std::fmt::{self, Display};
use std::sync::Arc;

/// Per-severity entry points over a [`Logger`].
///
/// Each severity comes in three shapes:
///
/// - `info(value)` stringifies a value with [`Display`];
/// - `infof(format_args!(..))` formats printf-style;
/// - `infoc(|| ..)` calls a closure.
///
/// The plain shape takes a single value. To join several, use the `f` shape
/// with `format_args!("{a}{b}")` or the `info!` family of macros.
///
/// In every shape the string is only built when the severity passes the
/// threshold, but only the closure form defers computing the arguments
/// themselves.
///
/// The `fatal*` methods log, then terminate through the sink. Termination
/// happens even when the fatal record is below the threshold and therefore
/// not written.
#[derive(Debug, Clone)]
pub struct LeveledLogger {
    logger: Logger,
}

macro_rules! leveled_methods {
    ($severity:expr, $name:literal, $plain:ident, $formatted:ident, $closure:ident) => {
        #[doc = concat!("Log a value at ", $name, " severity.")]
        #[track_caller]
        pub fn $plain(&self, value: impl Display) {
            self.emit($severity, move || value.to_string());
        }

        #[doc = concat!("Log pre-formatted arguments at ", $name, " severity.")]
        #[track_caller]
        pub fn $formatted(&self, args: fmt::Arguments<'_>) {
            self.emit($severity, move || fmt::format(args));
        }

        #[doc = concat!("Log the result of `producer` at ", $name, " severity.")]
        #[track_caller]
        pub fn $closure<F>(&self, producer: F)
        where
            F: FnOnce() -> String,
        {
            self.emit($severity, producer);
        }
    };
}

impl LeveledLogger {
    /// Wrap a logger
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Logger writing to standard error at or above `threshold`
    #[must_use]
    pub fn stderr(threshold: Severity) -> Self {
        Self::new(Logger::new(Arc::new(StreamSink::stderr()), threshold))
    }

    /// The underlying logger
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    leveled_methods!(Severity::Info, "INFO", info, infof, infoc);
    leveled_methods!(Severity::Warning, "WARNING", warning, warningf, warningc);
    leveled_methods!(Severity::Error, "ERROR", error, errorf, errorc);

    /// Log a value at FATAL severity, then terminate.
    #[track_caller]
    pub fn fatal(&self, value: impl Display) -> ! {
        self.emit(Severity::Fatal, move || value.to_string());
        self.logger.fail_now()
    }

    /// Log pre-formatted arguments at FATAL severity, then terminate.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Severity::Fatal, move || fmt::format(args));
        self.logger.fail_now()
    }

    /// Log the result of `producer` at FATAL severity, then terminate.
    #[track_caller]
    pub fn fatalc<F>(&self, producer: F) -> !
    where
        F: FnOnce() -> String,
    {
        self.emit(Severity::Fatal, producer);
        self.logger.fail_now()
    }

    #[track_caller]
    fn emit<F>(&self, severity: Severity, producer: F)
    where
        F: FnOnce() -> String,
    {
        if !self.logger.is_enabled(severity) {
            return;
        }
        let location = if self.logger.caller_location() {
            Some(Location::caller())
        } else {
            None
        };
        self.logger.log_at(severity, location, producer);
    }
}

impl From<Logger> for LeveledLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl AsRef<Logger> for LeveledLogger {
    fn as_ref(&self) -> &Logger {
        &self.logger
    }
}
