//! Text rendering of records
//!
//! Format: `L{index} {HH:MM:SS.ffffff}[ {location}]] {message}[\n]`

use crate::Record;
use chrono::{Local, TimeZone};
use std::fmt::Write as FmtWrite;

/// Render a record in local wall-clock time, optionally appending a newline.
#[must_use]
pub fn render(record: &Record, insert_newline: bool) -> String {
    render_in(record, &Local, insert_newline)
}

/// Render a record with its timestamp shown in `tz`.
#[must_use]
pub fn render_in<Tz>(record: &Record, tz: &Tz, insert_newline: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let message = record.message();
    let mut buf = String::with_capacity(32 + message.len());

    buf.push_str(record.severity().code());
    let time = record.timestamp().with_timezone(tz);
    let _ = write!(buf, " {}", time.format("%H:%M:%S%.6f"));

    if let Some(location) = record.location().filter(|l| !l.is_empty()) {
        let _ = write!(buf, " {location}");
    }

    buf.push_str("] ");
    buf.push_str(message);
    if insert_newline {
        buf.push('\n');
    }
    buf
}
