//! Concurrent writers sharing one sink

use leveled_logger::test_support::{RecordingController, SharedBuffer};
use leveled_logger::{LeveledLogger, Logger, Severity, StreamSink, TestSink};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 250;

#[test]
fn test_stream_sink_lines_do_not_interleave() {
    let buffer = SharedBuffer::new();
    let sink = Arc::new(StreamSink::new(buffer.clone()));
    let log = LeveledLogger::new(Logger::new(sink, Severity::Info));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = log.clone();
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    // Long bodies make torn writes easy to spot.
                    log.infoc(|| format!("thread={t} line={i} {}", "x".repeat(200)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("L0 "), "torn line: {line}");
        let body = line.split_once("] ").map(|(_, body)| body).unwrap();
        let (id, padding) = body.rsplit_once(' ').unwrap();
        assert_eq!(padding.len(), 200, "torn line: {line}");
        assert!(seen.insert(id.to_string()), "duplicate line: {id}");
    }
    assert_eq!(seen.len(), THREADS * LINES_PER_THREAD);
}

#[test]
fn test_test_sink_from_many_threads() {
    let controller = RecordingController::new();
    let sink = Arc::new(TestSink::new(controller.clone()));
    let log = LeveledLogger::new(Logger::new(sink, Severity::Warning));

    thread::scope(|scope| {
        for t in 0..THREADS {
            let log = &log;
            scope.spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    log.warningf(format_args!("{t}/{i}"));
                    log.info("filtered");
                }
            });
        }
    });

    let lines = controller.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert!(lines.iter().all(|line| line.starts_with("L1 ")));
    assert!(!controller.contains("filtered"));
}
