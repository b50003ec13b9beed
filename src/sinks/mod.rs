//! Sink management
//!
//! Exactly one sink is active at a time: the console (default) or an
//! appended file. The manager itself is not synchronized; the [`Logger`]
//! keeps it behind the same mutex that serializes record dispatch.
//!
//! [`Logger`]: crate::Logger

pub mod console;
pub mod file;

pub use console::{ConsoleWriter, SharedBuffer};
pub use file::FileSink;

use crate::core::{LoggerError, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub enum Sink {
    Console,
    File(FileSink),
}

/// Which destination is active, without borrowing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File(PathBuf),
}

pub struct SinkManager {
    console: ConsoleWriter,
    sink: Sink,
}

impl SinkManager {
    pub fn new(console: ConsoleWriter) -> Self {
        Self {
            console,
            sink: Sink::Console,
        }
    }

    /// Open `path` for appending and make it the active sink.
    ///
    /// On failure the active sink is left untouched.
    pub fn try_select_file_sink(&mut self, path: impl AsRef<Path>) -> Result<()> {
        // Flush before opening so a failed switch never leaves a new empty file behind.
        self.flush().map_err(|e| {
            LoggerError::io_operation("switching log file", "failed to flush previous sink", e)
        })?;
        let file = FileSink::open_append(path)?;
        self.sink = Sink::File(file);
        Ok(())
    }

    /// Like [`try_select_file_sink`](Self::try_select_file_sink), but reports
    /// failure as a notice on the console instead of returning it.
    pub fn select_file_sink(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(e) = self.try_select_file_sink(path) {
            let notice = match e {
                LoggerError::FileSinkError { message, .. } => {
                    format!("Failed to open log file: {} ({})\n", path.display(), message)
                }
                LoggerError::IoOperation { source, .. } => format!(
                    "Failed to switch log file: {} (flushing current sink: {})\n",
                    path.display(),
                    source
                ),
                other => format!("Failed to switch log file: {} ({})\n", path.display(), other),
            };
            if let Err(io_err) = self
                .console
                .write_all(notice.as_bytes())
                .and_then(|_| self.console.flush())
            {
                eprintln!("[LOGGER ERROR] Failed to write console notice: {}", io_err);
            }
        }
    }

    /// The currently active destination: the file if one is open, else the console.
    pub fn active_stream(&mut self) -> &mut dyn Write {
        match self.sink {
            Sink::File(ref mut file) => file as &mut dyn Write,
            Sink::Console => &mut self.console as &mut dyn Write,
        }
    }

    pub fn active_kind(&self) -> SinkKind {
        match self.sink {
            Sink::File(ref file) => SinkKind::File(file.path().to_path_buf()),
            Sink::Console => SinkKind::Console,
        }
    }

    pub fn console_is_terminal(&self) -> bool {
        self.console.is_terminal()
    }

    pub fn is_console(&self) -> bool {
        matches!(self.sink, Sink::Console)
    }

    /// Close any file sink and go back to the console.
    pub fn reset_to_console(&mut self) -> Result<()> {
        self.flush().map_err(|e| {
            LoggerError::io_operation("closing log file", "failed to flush file sink", e)
        })?;
        self.sink = Sink::Console;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.active_stream().flush()
    }
}
