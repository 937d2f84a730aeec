//! Logging macros that record where they were called from.
//!
//! Each macro takes a [`Logger`](crate::Logger) or
//! [`LeveledLogger`](crate::LeveledLogger) followed by `format!` arguments.
//! The location carries the module path as package plus file and line, and the
//! message is only formatted when the severity passes the threshold.
//!
//! ```
//! use leveled_logger::{LeveledLogger, Severity, info};
//!
//! let log = LeveledLogger::stderr(Severity::Info);
//! let peers = 3;
//! info!(log, "connected to {peers} peers");
//! ```

/// Location of the macro call site: module path, file and line.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new()
            .with_package(::std::module_path!())
            .with_file(::std::file!())
            .with_line(::std::line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_located {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        ::std::convert::AsRef::<$crate::Logger>::as_ref(&$logger).log_at(
            $severity,
            ::std::option::Option::Some($crate::location!()),
            || ::std::format!($($arg)+),
        )
    };
}

/// Log at INFO severity with the call-site location
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_located!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log at WARNING severity with the call-site location
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_located!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log at ERROR severity with the call-site location
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_located!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log at FATAL severity with the call-site location, then terminate
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        let __logger = ::std::convert::AsRef::<$crate::Logger>::as_ref(&$logger);
        $crate::__log_located!(__logger, $crate::Severity::Fatal, $($arg)+);
        __logger.fail_now()
    }};
}
