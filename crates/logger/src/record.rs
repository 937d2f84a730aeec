//! Log record type

use crate::{Location, Severity};
use chrono::{DateTime, Utc};

/// A single log event. Sinks only ever see it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    severity: Severity,
    timestamp: DateTime<Utc>,
    message: String,
    location: Option<Location>,
}

impl Record {
    /// Create a record stamped with the given time
    #[inline]
    pub fn new(severity: Severity, timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp,
            message: message.into(),
            location: None,
        }
    }

    /// Builder-style method for setting location
    #[inline]
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Severity of the event
    #[inline]
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// When logging was requested
    #[inline]
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The rendered message body
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location, if one was attached
    #[inline]
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}
