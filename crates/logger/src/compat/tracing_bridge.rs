//! Bridge from `tracing`

use crate::{Location, Logger, Severity};
use std::fmt::Write as FmtWrite;
use std::marker::PhantomData;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that forwards events to a [`Logger`].
///
/// The innermost span's name becomes the record's function, and fields other
/// than `message` are appended to the message as `key=value`.
pub struct TracingBridge<S> {
    logger: Logger,
    _subscriber: PhantomData<fn(S)>,
}

impl<S> TracingBridge<S> {
    /// Create a new tracing bridge
    pub const fn new(logger: Logger) -> Self {
        Self {
            logger,
            _subscriber: PhantomData,
        }
    }
}

impl<S> Layer<S> for TracingBridge<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let severity = map_level(*event.metadata().level());
        if !self.logger.is_enabled(severity) {
            return;
        }

        let metadata = event.metadata();
        let mut location = Location::new();
        if let Some(module) = metadata.module_path() {
            location = location.with_package(module);
        }
        if let Some(span) = ctx.event_span(event) {
            location = location.with_function(span.name());
        }
        if let Some(file) = metadata.file() {
            location = location.with_file(file);
        }
        if let Some(line) = metadata.line() {
            location = location.with_line(line);
        }

        self.logger.log_at(severity, Some(location), || {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            visitor.finish()
        });
    }
}

/// `tracing` has no fatal level; DEBUG and TRACE collapse into INFO.
fn map_level(level: tracing::Level) -> Severity {
    match level {
        tracing::Level::ERROR => Severity::Error,
        tracing::Level::WARN => Severity::Warning,
        _ => Severity::Info,
    }
}

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value:?}", field.name());
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            let _ = write!(self.fields, "{}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, value);
        }
    }
}

/// Install a global tracing subscriber that forwards every event to `logger`.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
///
/// # Example
/// ```no_run
/// use leveled_logger::{Logger, Severity, StreamSink, compat::init_tracing_bridge};
/// use std::sync::Arc;
///
/// let logger = Logger::new(Arc::new(StreamSink::stderr()), Severity::Info);
/// init_tracing_bridge(logger).expect("Failed to set tracing bridge");
/// ```
pub fn init_tracing_bridge(logger: Logger) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(TracingBridge::new(logger))
        .try_init()
}
