//! Scoped log records
//!
//! A [`LogRecord`] is opened at the call site, collects the message text
//! piece by piece, and is dispatched exactly once: either by an explicit
//! [`close`](LogRecord::close) or, failing that, when it is dropped (which
//! also covers early returns and unwinding).
//!
//! The record holds the logger's sink lock from the moment it is opened
//! until dispatch has finished, so a line from one thread is never split by
//! a line from another.

use super::color::{set_color, ConsoleColor};
use super::log_level::LogLevel;
use super::logger::Logger;
use crate::sinks::SinkManager;
use parking_lot::MutexGuard;
use std::fmt;
use std::io::{self, Write};

/// Strip the directory components from a source path.
///
/// Both `/` and `\` count as separators.
///
/// ```
/// use scoped_logger::short_file_name;
///
/// assert_eq!(short_file_name("/a/b/c.cpp"), "c.cpp");
/// assert_eq!(short_file_name("c.cpp"), "c.cpp");
/// ```
pub fn short_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// One log line under construction.
///
/// Created by [`Logger::record`] (or the `log_*!` macros) with the level and
/// the caller's location fixed. Values streamed in with [`insert`](Self::insert)
/// or [`push`](Self::push) are appended to the message. The logger's lock is
/// held until the record is closed or dropped, at which point it is handed to
/// the interception function, the platform log, or the active sink.
///
/// The record is neither `Clone` nor `Send`: it belongs to the thread that
/// opened it.
pub struct LogRecord<'a> {
    logger: &'a Logger,
    sinks: MutexGuard<'a, SinkManager>,
    level: LogLevel,
    file: &'a str,
    line: u32,
    message: String,
    dispatched: bool,
}

impl<'a> LogRecord<'a> {
    /// Blocks until the logger's sink lock is free.
    pub(crate) fn open(logger: &'a Logger, level: LogLevel, file: &'a str, line: u32) -> Self {
        let sinks = logger.lock_sinks();
        Self {
            logger,
            sinks,
            level,
            file: short_file_name(file),
            line,
            message: String::new(),
            dispatched: false,
        }
    }

    /// Append the text form of `value` and hand the record back for chaining.
    #[must_use = "the record is dispatched when dropped; chain more inserts or call close()"]
    pub fn insert(mut self, value: impl fmt::Display) -> Self {
        self.push(value);
        self
    }

    /// Append the text form of `value` in place.
    pub fn push(&mut self, value: impl fmt::Display) -> &mut Self {
        use std::fmt::Write as _;
        if write!(self.message, "{}", value).is_err() {
            eprintln!("[LOGGER ERROR] A value's Display implementation failed; fragment dropped");
        }
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn file(&self) -> &str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Dispatch the record now and release the lock.
    pub fn close(mut self) {
        self.dispatch();
    }

    fn dispatch(&mut self) {
        if self.dispatched {
            return;
        }
        self.dispatched = true;

        if self.intercepted() {
            return;
        }

        if let Some(platform) = self.logger.platform_logger() {
            platform.write(
                self.level.platform_priority(),
                self.logger.platform_tag(),
                &self.message,
            );
            return;
        }

        if let Err(e) = self.write_line() {
            eprintln!("[LOGGER ERROR] Failed to write log line: {}", e);
        }
    }

    /// Run the interception function, if any. A panicking callback counts
    /// as "not handled".
    fn intercepted(&self) -> bool {
        let Some(callback) = self.logger.interception_callback() else {
            return false;
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            callback(self.level, &self.message, self.file, self.line)
        }));

        match result {
            Ok(handled) => handled,
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Interception callback panicked: {}. \
                     Falling back to the default sink.",
                    panic_msg
                );
                false
            }
        }
    }

    /// `[HH:MM:SS|Label] message (file:line)\n`, colored tag on a color console.
    fn write_line(&mut self) -> io::Result<()> {
        let colorize = self.logger.should_colorize(&self.sinks);
        let timestamp = self.logger.timestamp();

        let mut line = Vec::with_capacity(self.message.len() + self.file.len() + 40);
        if colorize {
            set_color(&mut line, self.level.color())?;
        }
        write!(line, "[{}|{}] ", timestamp, self.level.label())?;
        if colorize {
            set_color(&mut line, ConsoleColor::Reset)?;
        }
        writeln!(line, "{} ({}:{})", self.message, self.file, self.line)?;

        let out = self.sinks.active_stream();
        out.write_all(&line)?;
        out.flush()
    }
}

impl fmt::Write for LogRecord<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.message.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("file", &self.file)
            .field("line", &self.line)
            .field("message", &self.message)
            .finish()
    }
}

impl Drop for LogRecord<'_> {
    fn drop(&mut self) {
        self.dispatch();
    }
}
