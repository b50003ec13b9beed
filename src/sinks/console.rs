//! Console destination

use parking_lot::Mutex;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// The console stream: process stdout by default, or any injected writer.
pub struct ConsoleWriter {
    inner: Box<dyn Write + Send>,
    is_stdout: bool,
}

impl ConsoleWriter {
    pub fn stdout() -> Self {
        Self {
            inner: Box::new(io::stdout()),
            is_stdout: true,
        }
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Box::new(writer),
            is_stdout: false,
        }
    }

    /// Whether this is the process stdout attached to a terminal.
    pub fn is_terminal(&self) -> bool {
        self.is_stdout && io::stdout().is_terminal()
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory console that can be cloned and inspected, for capturing output.
///
/// # Example
///
/// ```
/// use scoped_logger::{ColorMode, Logger, SharedBuffer};
///
/// let console = SharedBuffer::new();
/// let logger = Logger::builder()
///     .console_writer(console.clone())
///     .color_mode(ColorMode::Never)
///     .build();
///
/// logger.info("main.rs", 7).insert("ready").close();
/// assert!(console.contents().contains("ready (main.rs:7)"));
/// ```
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_buffer_clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = ConsoleWriter::from_writer(buffer.clone());
        writer.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(buffer.lines(), vec!["one", "two"]);
        buffer.clear();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_injected_writer_is_not_terminal() {
        let writer = ConsoleWriter::from_writer(SharedBuffer::new());
        assert!(!writer.is_terminal());
    }
}
