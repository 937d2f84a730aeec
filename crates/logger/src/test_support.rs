//! Test support utilities
//!
//! In-memory destinations and controllers for asserting on logger output.
//! Only available when the `test-support` feature is enabled.

use crate::TestController;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A cloneable in-memory writer. Clones share the same bytes, so a test can
/// keep one handle while a [`StreamSink`](crate::StreamSink) owns another.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<AtomicUsize>,
}

impl SharedBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Written lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of times the writer was flushed
    pub fn flushes(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A [`TestController`] that records what it is given.
///
/// `fail_now` counts the call and then panics, so the calling test can catch
/// the unwind and assert on [`failures`](Self::failures).
#[derive(Debug, Clone, Default)]
pub struct RecordingController {
    lines: Arc<Mutex<Vec<String>>>,
    failures: Arc<AtomicUsize>,
}

impl RecordingController {
    /// Create a controller with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines reported so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Check if any reported line contains `text`
    pub fn contains(&self, text: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(text))
    }

    /// Number of `fail_now` calls
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }
}

impl TestController for RecordingController {
    fn log(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }

    fn fail_now(&self) -> ! {
        self.failures.fetch_add(1, Ordering::SeqCst);
        panic!("RecordingController::fail_now");
    }
}
