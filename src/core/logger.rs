//! Main logger implementation

use super::{
    callback::{CallbackProvider, CallbackRegistry, InterceptCallback},
    color::ColorMode,
    config::{format_time, validate_time_format, LoggerConfig, DEFAULT_TIME_FORMAT},
    error::Result,
    log_level::LogLevel,
    log_record::LogRecord,
};
use crate::platform::{default_platform_logger, PlatformLogger, DEFAULT_PLATFORM_TAG};
use crate::sinks::{ConsoleWriter, SinkKind, SinkManager};
use chrono::Local;
use parking_lot::{Mutex, MutexGuard};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// A logging service: one sink, one lock, one optional interception function.
///
/// Every [`LogRecord`] opened on a logger holds the logger's lock until it is
/// dispatched, so logging through one `Logger` is fully serialized. Do not
/// open a second record, or call [`select_file_sink`](Self::select_file_sink),
/// on the same thread while a record is still open; the lock is not reentrant.
/// The same applies to an interception function logging through the logger
/// that invoked it.
pub struct Logger {
    sinks: Mutex<SinkManager>,
    registry: CallbackRegistry,
    provider: Option<Arc<dyn CallbackProvider>>,
    platform: Option<Box<dyn PlatformLogger>>,
    platform_tag: String,
    color_mode: ColorMode,
    time_format: String,
}

impl Logger {
    /// A console logger with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Open a record for `level` at `file:line`. Blocks until the lock is free.
    pub fn record<'a>(&'a self, level: LogLevel, file: &'a str, line: u32) -> LogRecord<'a> {
        LogRecord::open(self, level, file, line)
    }

    #[inline]
    pub fn debug<'a>(&'a self, file: &'a str, line: u32) -> LogRecord<'a> {
        self.record(LogLevel::Debug, file, line)
    }

    #[inline]
    pub fn info<'a>(&'a self, file: &'a str, line: u32) -> LogRecord<'a> {
        self.record(LogLevel::Info, file, line)
    }

    #[inline]
    pub fn warn<'a>(&'a self, file: &'a str, line: u32) -> LogRecord<'a> {
        self.record(LogLevel::Warn, file, line)
    }

    #[inline]
    pub fn error<'a>(&'a self, file: &'a str, line: u32) -> LogRecord<'a> {
        self.record(LogLevel::Error, file, line)
    }

    /// Log a complete message in one call.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: impl AsRef<str>) {
        self.record(level, file, line).insert(message.as_ref()).close();
    }

    /// Redirect subsequent output to `path`, opened for appending.
    ///
    /// If the file cannot be opened a notice is written to the console and
    /// the current sink stays active.
    pub fn select_file_sink(&self, path: impl AsRef<Path>) {
        self.sinks.lock().select_file_sink(path);
    }

    /// Fallible variant of [`select_file_sink`](Self::select_file_sink).
    pub fn try_select_file_sink(&self, path: impl AsRef<Path>) -> Result<()> {
        self.sinks.lock().try_select_file_sink(path)
    }

    pub fn active_sink(&self) -> SinkKind {
        self.sinks.lock().active_kind()
    }

    /// Register the interception function, replacing any previous one.
    ///
    /// A provider supplied through [`LoggerBuilder::callback_provider`] is
    /// consulted first; this slot is the fallback.
    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(LogLevel, &str, &str, u32) -> bool + Send + Sync + 'static,
    {
        self.registry.set(callback);
    }

    pub fn clear_callback(&self) {
        self.registry.clear();
    }

    pub fn flush(&self) -> Result<()> {
        self.sinks.lock().flush()?;
        Ok(())
    }

    /// Flush and close any file sink; later records go to the console.
    pub fn shutdown(&self) -> Result<()> {
        self.sinks.lock().reset_to_console()
    }

    pub(crate) fn lock_sinks(&self) -> MutexGuard<'_, SinkManager> {
        self.sinks.lock()
    }

    pub(crate) fn interception_callback(&self) -> Option<InterceptCallback> {
        self.provider
            .as_ref()
            .and_then(|provider| provider.callback())
            .or_else(|| self.registry.callback())
    }

    pub(crate) fn platform_logger(&self) -> Option<&dyn PlatformLogger> {
        self.platform.as_deref()
    }

    pub(crate) fn platform_tag(&self) -> &str {
        &self.platform_tag
    }

    /// Colors are only ever written to the console, never into a file.
    pub(crate) fn should_colorize(&self, sinks: &SinkManager) -> bool {
        if !sinks.is_console() {
            return false;
        }
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => sinks.console_is_terminal(),
        }
    }

    /// Local wall-clock time in the configured format.
    pub(crate) fn timestamp(&self) -> String {
        format_time(&Local::now().naive_local(), &self.time_format)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.sinks.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created with default settings on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Builder for creating a Logger with custom configuration
///
/// # Examples
///
/// ```
/// use scoped_logger::{ColorMode, Logger, SharedBuffer};
///
/// let console = SharedBuffer::new();
/// let logger = Logger::builder()
///     .console_writer(console.clone())
///     .color_mode(ColorMode::Never)
///     .time_format("%H:%M")
///     .build();
///
/// logger.warn("net.rs", 12).insert("retry ").insert(3).close();
/// assert!(console.contents().ends_with("|Warn ] retry 3 (net.rs:12)\n"));
/// ```
pub struct LoggerBuilder {
    console: Option<ConsoleWriter>,
    log_file: Option<PathBuf>,
    color_mode: ColorMode,
    time_format: String,
    platform_tag: String,
    platform: Option<Box<dyn PlatformLogger>>,
    use_default_platform: bool,
    provider: Option<Arc<dyn CallbackProvider>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            console: None,
            log_file: None,
            color_mode: ColorMode::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            platform_tag: DEFAULT_PLATFORM_TAG.to_string(),
            platform: None,
            use_default_platform: true,
            provider: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: LoggerConfig) -> Self {
        let mut builder = Self::new()
            .color_mode(config.color)
            .time_format(config.time_format)
            .platform_tag(config.platform_tag);
        builder.log_file = config.log_file;
        builder
    }

    /// Use `writer` as the console instead of stdout.
    #[must_use]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(ConsoleWriter::from_writer(writer));
        self
    }

    /// Append to `path` from the start.
    #[must_use]
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// strftime pattern for the timestamp in the level tag.
    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    #[must_use]
    pub fn platform_tag(mut self, tag: impl Into<String>) -> Self {
        self.platform_tag = tag.into();
        self
    }

    /// Route records to `platform` instead of the console/file sink.
    #[must_use]
    pub fn platform_logger(mut self, platform: impl PlatformLogger + 'static) -> Self {
        self.platform = Some(Box::new(platform));
        self
    }

    /// Never use the native platform log service, even where one exists.
    #[must_use]
    pub fn without_platform_logger(mut self) -> Self {
        self.platform = None;
        self.use_default_platform = false;
        self
    }

    #[must_use]
    pub fn callback_provider(mut self, provider: Arc<dyn CallbackProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build, validating the time format and opening the log file strictly.
    pub fn try_build(self) -> Result<Logger> {
        validate_time_format(&self.time_format)?;
        let log_file = self.log_file.clone();
        let logger = self.assemble();
        if let Some(path) = log_file {
            logger.try_select_file_sink(path)?;
        }
        Ok(logger)
    }

    /// Build. A log file that cannot be opened falls back to the console.
    pub fn build(self) -> Logger {
        let log_file = self.log_file.clone();
        let logger = self.assemble();
        if let Some(path) = log_file {
            logger.select_file_sink(path);
        }
        logger
    }

    fn assemble(self) -> Logger {
        let platform = match self.platform {
            Some(platform) => Some(platform),
            None if self.use_default_platform => default_platform_logger(),
            None => None,
        };

        Logger {
            sinks: Mutex::new(SinkManager::new(self.console.unwrap_or_default())),
            registry: CallbackRegistry::new(),
            provider: self.provider,
            platform,
            platform_tag: self.platform_tag,
            color_mode: self.color_mode,
            time_format: self.time_format,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
