//! Concurrency tests for line atomicity
//!
//! These tests verify:
//! - Concurrent records never interleave within a line
//! - An open record blocks other threads until it is dispatched
//! - Sink selection racing with logging never tears a line

use regex::Regex;
use scoped_logger::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 200;

fn capture_logger() -> (Arc<Logger>, SharedBuffer) {
    let console = SharedBuffer::new();
    let logger = Logger::builder()
        .console_writer(console.clone())
        .color_mode(ColorMode::Never)
        .without_platform_logger()
        .build();
    (Arc::new(logger), console)
}

fn spawn_writers(logger: &Arc<Logger>) -> Vec<thread::JoinHandle<()>> {
    (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    let mut record = logger.info("worker.rs", t as u32);
                    // Several fragments per line widen the window for interleaving.
                    for _ in 0..5 {
                        record.push("t").push(t).push(":").push(i).push(" ");
                    }
                    record.close();
                }
            })
        })
        .collect()
}

fn assert_lines_intact(lines: &[&str]) {
    let re = Regex::new(r"^\[\d\d:\d\d:\d\d\|Info \] (t(\d+):(\d+) ){5} \(worker\.rs:(\d+)\)$")
        .unwrap();
    for line in lines {
        let caps = re
            .captures(line)
            .unwrap_or_else(|| panic!("torn or malformed line: {:?}", line));
        assert_eq!(&caps[2], &caps[4], "fragments from another thread in {:?}", line);
        let fragment = format!("t{}:{} ", &caps[2], &caps[3]);
        assert!(
            line.contains(&fragment.repeat(5)),
            "fragments from another record in {:?}",
            line
        );
    }
}

#[test]
fn test_concurrent_console_lines_are_atomic() {
    let (logger, console) = capture_logger();

    for handle in spawn_writers(&logger) {
        handle.join().expect("writer panicked");
    }

    let contents = console.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert_lines_intact(&lines);
}

#[test]
fn test_concurrent_file_lines_are_atomic() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");
    let (logger, _console) = capture_logger();
    logger.select_file_sink(&log_file);

    for handle in spawn_writers(&logger) {
        handle.join().expect("writer panicked");
    }

    let contents = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert_lines_intact(&lines);
}

#[test]
fn test_open_record_blocks_other_threads() {
    let (logger, console) = capture_logger();
    let (opened_tx, opened_rx) = mpsc::channel();
    let second_done = Arc::new(AtomicBool::new(false));

    let first = {
        let logger = Arc::clone(&logger);
        let second_done = Arc::clone(&second_done);
        thread::spawn(move || {
            let record = logger.warn("first.rs", 1).insert("first");
            opened_tx.send(()).unwrap();
            thread::sleep(Duration::from_millis(150));
            assert!(
                !second_done.load(Ordering::SeqCst),
                "second record dispatched while the first held the lock"
            );
            record.close();
        })
    };

    opened_rx.recv().unwrap();
    let second = {
        let logger = Arc::clone(&logger);
        let second_done = Arc::clone(&second_done);
        thread::spawn(move || {
            logger.warn("second.rs", 2).insert("second").close();
            second_done.store(true, Ordering::SeqCst);
        })
    };

    first.join().expect("first thread panicked");
    second.join().expect("second thread panicked");

    let lines = console.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first (first.rs:1)"));
    assert!(lines[1].ends_with("second (second.rs:2)"));
}

#[test]
fn test_sink_switch_during_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("switch.log");
    let (logger, console) = capture_logger();

    let writers = spawn_writers(&logger);
    thread::sleep(Duration::from_millis(5));
    logger.select_file_sink(&log_file);
    for handle in writers {
        handle.join().expect("writer panicked");
    }

    let console_contents = console.contents();
    let file_contents = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let mut lines: Vec<&str> = console_contents.lines().collect();
    lines.extend(file_contents.lines());

    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert_lines_intact(&lines);
}
