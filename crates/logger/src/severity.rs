//! Log severities

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine progress information.
    Info = 0,
    /// Something unexpected that the program can recover from.
    #[serde(alias = "warn")]
    Warning = 1,
    /// An operation failed.
    Error = 2,
    /// The program cannot continue; logging at this severity terminates.
    Fatal = 3,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Fatal];

    /// Numeric index used in rendered output (`L0`..`L3`).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fixed short token used as the first field of a rendered line.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Info => "L0",
            Self::Warning => "L1",
            Self::Error => "L2",
            Self::Fatal => "L3",
        }
    }

    /// Upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" | "l0" => Ok(Self::Info),
            "warning" | "warn" | "l1" => Ok(Self::Warning),
            "error" | "l2" => Ok(Self::Error),
            "fatal" | "l3" => Ok(Self::Fatal),
            _ => Err(Error::ParseSeverity(s.to_string())),
        }
    }
}
