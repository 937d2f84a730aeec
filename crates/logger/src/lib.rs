//! Leveled logging with lazy, threshold-gated message construction.
//!
//! A [`Logger`] holds a minimum [`Severity`] and a shared [`Sink`]. Messages
//! below the threshold are dropped before their producer ever runs, so callers
//! can put arbitrarily expensive formatting inside a closure for free.
//! [`LeveledLogger`] layers per-severity entry points on top, and escalates
//! fatal messages into sink-driven termination.
//!
//! ```no_run
//! use leveled_logger::{LeveledLogger, Logger, Severity, StreamSink};
//! use std::sync::Arc;
//!
//! let sink = StreamSink::create("/tmp/app.log").expect("log file");
//! let log = LeveledLogger::new(Logger::new(Arc::new(sink), Severity::Warning));
//!
//! log.info("dropped before formatting");
//! log.warningc(|| format!("disk at {}%", 93));
//! ```
#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod format;
mod leveled;
mod location;
mod logger;
mod macros;
mod record;
mod severity;
mod sink;

pub mod compat;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{FileSinkConfig, LoggerConfig};
pub use error::{Error, Result};
pub use format::{render, render_in};
pub use leveled::LeveledLogger;
pub use location::Location;
pub use logger::Logger;
pub use record::Record;
pub use severity::Severity;
pub use sink::{FATAL_EXIT_CODE, LibtestController, Sink, StreamSink, TestController, TestSink};
