//! Sink reporting through a test harness

use crate::{Record, Sink, render};

/// The two things a test harness must offer to host a logger.
pub trait TestController: Send + Sync + 'static {
    /// Report one line. The harness adds its own line terminator.
    fn log(&self, text: &str);

    /// Fail the current test immediately.
    fn fail_now(&self) -> !;
}

/// Sink that routes records into a test harness.
///
/// Lines are rendered without a trailing newline, and fatal records fail
/// the current test instead of exiting the process.
#[derive(Debug, Clone)]
pub struct TestSink<C> {
    controller: C,
}

impl<C: TestController> TestSink<C> {
    /// Wrap a test controller
    pub const fn new(controller: C) -> Self {
        Self { controller }
    }

    /// The wrapped controller
    pub const fn controller(&self) -> &C {
        &self.controller
    }
}

impl<C: TestController> Sink for TestSink<C> {
    fn output(&self, record: &Record) {
        self.controller.log(&render(record, false));
    }

    fn fail_now(&self) -> ! {
        self.controller.fail_now()
    }
}

/// Controller for Rust's built-in test harness.
///
/// Lines go through `println!`, which libtest captures per test and shows on
/// failure; failing panics the current test thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibtestController;

impl TestController for LibtestController {
    fn log(&self, text: &str) {
        println!("{text}");
    }

    fn fail_now(&self) -> ! {
        panic!("fatal record logged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use crate::test_support::RecordingController;
    use chrono::DateTime;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn record(message: &str) -> Record {
        let timestamp = DateTime::from_timestamp(0, 5_000).unwrap();
        Record::new(Severity::Warning, timestamp, message)
    }

    #[test]
    fn test_output_has_no_trailing_newline() {
        let controller = RecordingController::new();
        let sink = TestSink::new(controller.clone());

        sink.output(&record("from test"));

        let lines = controller.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("L1 "));
        assert!(lines[0].ends_with(".000005] from test"));
        assert!(!lines[0].ends_with('\n'));
        assert_eq!(lines[0], render(&record("from test"), false));
    }

    #[test]
    fn test_fail_now_forwards_to_controller() {
        let controller = RecordingController::new();
        let sink = TestSink::new(controller.clone());

        let result = catch_unwind(AssertUnwindSafe(|| {
            sink.fail_now();
        }));

        assert!(result.is_err());
        assert_eq!(controller.failures(), 1);
    }

    #[test]
    #[should_panic(expected = "fatal record logged")]
    fn test_libtest_controller_fails_test() {
        TestSink::new(LibtestController).fail_now();
    }

    #[test]
    fn test_controller_sees_each_output() {
        let sink = TestSink::new(RecordingController::new());

        sink.output(&record("first"));
        sink.output(&record("second"));

        let lines = sink.controller().lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("] second"));
        assert_eq!(sink.controller().failures(), 0);
    }
}
