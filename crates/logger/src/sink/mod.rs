//! Output sinks
//!
//! A sink performs the side effect for a record and owns termination. The
//! stream sink writes lines to any [`std::io::Write`] and exits the process on
//! fatal; the test sink hands lines to a test harness and lets the harness
//! fail the test.

mod harness;
mod stream;

pub use harness::{LibtestController, TestController, TestSink};
pub use stream::{FATAL_EXIT_CODE, StreamSink};

use crate::Record;

/// Destination for rendered records.
pub trait Sink: Send + Sync + 'static {
    /// Persist or display a record.
    ///
    /// Safe to call from many threads at once. Concurrent calls never
    /// interleave their output, but may complete in any order.
    fn output(&self, record: &Record);

    /// Release the destination and terminate the owner: the process for
    /// stream sinks, the running test for harness sinks.
    fn fail_now(&self) -> !;
}
