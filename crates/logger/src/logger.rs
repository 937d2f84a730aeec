//! Threshold filtering and dispatch

use crate::{Location, LoggerConfig, Record, Severity, Sink};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// A minimum severity bound to a sink.
///
/// Clones share the sink. The threshold and sink are fixed at construction.
#[derive(Clone)]
pub struct Logger {
    /// `None` forwards nothing
    threshold: Option<Severity>,
    sink: Arc<dyn Sink>,
    caller_location: bool,
}

impl Logger {
    /// Create a logger forwarding records at or above `threshold` to `sink`
    pub fn new(sink: Arc<dyn Sink>, threshold: Severity) -> Self {
        Self {
            threshold: Some(threshold),
            sink,
            caller_location: false,
        }
    }

    /// Create a logger that forwards nothing. Fatal calls through a
    /// [`LeveledLogger`](crate::LeveledLogger) still terminate.
    pub fn off(sink: Arc<dyn Sink>) -> Self {
        Self {
            threshold: None,
            sink,
            caller_location: false,
        }
    }

    /// Create a logger from configuration
    pub fn from_config(sink: Arc<dyn Sink>, config: &LoggerConfig) -> Self {
        Self::new(sink, config.threshold).with_caller_location(config.caller_location)
    }

    /// Attach the caller's file and line to records logged through
    /// [`LeveledLogger`](crate::LeveledLogger)
    #[must_use]
    pub fn with_caller_location(mut self, enabled: bool) -> Self {
        self.caller_location = enabled;
        self
    }

    /// Minimum severity that reaches the sink, `None` when off
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> Option<Severity> {
        self.threshold
    }

    /// Whether caller locations are recorded
    #[inline]
    #[must_use]
    pub const fn caller_location(&self) -> bool {
        self.caller_location
    }

    /// Check if a severity passes the threshold
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.threshold.is_some_and(|threshold| severity >= threshold)
    }

    /// The sink records are dispatched to
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Log a message without location metadata.
    ///
    /// `producer` only runs if `severity` passes the threshold.
    #[inline]
    pub fn log<F>(&self, severity: Severity, producer: F)
    where
        F: FnOnce() -> String,
    {
        self.log_at(severity, None, producer);
    }

    /// Log a message with optional location metadata.
    ///
    /// Below the threshold this returns without calling `producer` and without
    /// touching the sink. Otherwise the timestamp is taken before `producer`
    /// runs, so slow message construction does not skew it. A panic in
    /// `producer` propagates to the caller.
    pub fn log_at<F>(&self, severity: Severity, location: Option<Location>, producer: F)
    where
        F: FnOnce() -> String,
    {
        if !self.is_enabled(severity) {
            return;
        }

        let timestamp = Utc::now();
        let mut record = Record::new(severity, timestamp, producer());
        if let Some(location) = location {
            record = record.with_location(location);
        }

        self.sink.output(&record);
    }

    /// Terminate through the sink: exit the process or fail the test.
    pub fn fail_now(&self) -> ! {
        self.sink.fail_now()
    }
}

impl AsRef<Self> for Logger {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("caller_location", &self.caller_location)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StreamSink;
    use crate::TestSink;
    use crate::test_support::{RecordingController, SharedBuffer};
    use chrono::TimeDelta;
    use parking_lot::Mutex;
    use std::cell::Cell;
    use std::time::Duration;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Sink that only counts calls
    #[derive(Default)]
    struct CountingSink {
        outputs: AtomicUsize,
    }

    impl Sink for CountingSink {
        fn output(&self, _record: &Record) {
            self.outputs.fetch_add(1, Ordering::SeqCst);
        }

        fn fail_now(&self) -> ! {
            panic!("CountingSink::fail_now");
        }
    }

    /// Sink that keeps every record it is given
    #[derive(Default)]
    struct KeepingSink {
        records: Mutex<Vec<Record>>,
    }

    impl Sink for KeepingSink {
        fn output(&self, record: &Record) {
            self.records.lock().push(record.clone());
        }

        fn fail_now(&self) -> ! {
            panic!("KeepingSink::fail_now");
        }
    }

    #[test]
    fn test_output() {
        let sink = Arc::new(CountingSink::default());
        let logger = Logger::new(sink.clone(), Severity::Info);

        logger.log(Severity::Info, || "hello".to_string());

        assert_eq!(sink.outputs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_output() {
        let sink = Arc::new(CountingSink::default());
        let logger = Logger::new(sink.clone(), Severity::Warning);

        let called = Cell::new(false);
        // The message is logged below the filter level.
        logger.log(Severity::Info, || {
            called.set(true);
            String::new()
        });

        assert!(!called.get(), "producer evaluated even though no output produced");
        assert_eq!(sink.outputs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_threshold_matrix() {
        for threshold in Severity::ALL {
            for severity in Severity::ALL {
                let sink = Arc::new(CountingSink::default());
                let logger = Logger::new(sink.clone(), threshold);
                let calls = Cell::new(0);

                logger.log(severity, || {
                    calls.set(calls.get() + 1);
                    "message".to_string()
                });

                let expected = usize::from(severity >= threshold);
                assert_eq!(calls.get(), expected, "{severity} vs {threshold}");
                assert_eq!(sink.outputs.load(Ordering::SeqCst), expected);
            }
        }
    }

    #[test]
    fn test_off_forwards_nothing() {
        let sink = Arc::new(CountingSink::default());
        let logger = Logger::off(sink.clone());
        let called = Cell::new(false);

        for severity in Severity::ALL {
            assert!(!logger.is_enabled(severity));
            logger.log(severity, || {
                called.set(true);
                String::new()
            });
        }

        assert_eq!(logger.threshold(), None);
        assert!(!called.get());
        assert_eq!(sink.outputs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_record_contents() {
        let controller = RecordingController::new();
        let logger = Logger::new(Arc::new(TestSink::new(controller.clone())), Severity::Info);
        let location = Location::new().with_package("pkg").with_function("run");

        logger.log_at(Severity::Error, Some(location), || "disk full".to_string());

        let lines = controller.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("L2 "));
        assert!(lines[0].ends_with(" pkg.run] disk full"));
    }

    #[test]
    fn test_timestamp_taken_before_producer() {
        let sink = Arc::new(KeepingSink::default());
        let logger = Logger::new(sink.clone(), Severity::Info);

        let mut inside = None;
        logger.log(Severity::Info, || {
            std::thread::sleep(Duration::from_millis(20));
            inside = Some(Utc::now());
            "slow".to_string()
        });

        let inside = inside.unwrap();
        let records = sink.records.lock();
        assert_eq!(records.len(), 1);
        assert!(records[0].timestamp() <= inside);
        assert!(inside - records[0].timestamp() >= TimeDelta::milliseconds(20));
    }

    #[test]
    fn test_stream_output() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(Arc::new(StreamSink::new(buffer.clone())), Severity::Info);

        logger.log(Severity::Warning, || "to stream".to_string());

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("L1 ") && lines[0].ends_with("] to stream"));
    }

    #[test]
    fn test_producer_panic_propagates() {
        let sink = Arc::new(CountingSink::default());
        let logger = Logger::new(sink.clone(), Severity::Info);

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.log(Severity::Error, || panic!("producer failed"));
        }));

        assert!(result.is_err());
        assert_eq!(sink.outputs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_from_config() {
        let config = LoggerConfig {
            threshold: Severity::Error,
            caller_location: true,
        };
        let logger = Logger::from_config(Arc::new(CountingSink::default()), &config);

        assert_eq!(logger.threshold(), Some(Severity::Error));
        assert!(logger.caller_location());
        assert!(!logger.is_enabled(Severity::Warning));
        assert!(logger.is_enabled(Severity::Fatal));
    }

    #[test]
    fn test_fail_now_reaches_sink() {
        let controller = RecordingController::new();
        let logger = Logger::new(Arc::new(TestSink::new(controller.clone())), Severity::Info);

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.fail_now();
        }));

        assert!(result.is_err());
        assert_eq!(controller.failures(), 1);
    }
}
