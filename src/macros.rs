//! Call-site entry points.
//!
//! Each macro captures the caller's `file!()` and `line!()`. With only a
//! logger argument it returns an open [`LogRecord`](crate::LogRecord) to
//! stream values into; with format arguments it logs the formatted message
//! and dispatches immediately.
//!
//! # Examples
//!
//! ```
//! use scoped_logger::{log_debug, log_error, ColorMode, Logger, SharedBuffer};
//!
//! let console = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .console_writer(console.clone())
//!     .color_mode(ColorMode::Never)
//!     .build();
//!
//! // Streamed record, dispatched by close()
//! log_debug!(logger).insert("heartbeat ").insert(12).close();
//!
//! // Formatted, dispatched right away
//! let code = 500;
//! log_error!(logger, "request failed with {}", code);
//!
//! assert!(console.contents().contains("request failed with 500"));
//! ```

/// Open a record at the given level.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = Logger::builder().console_writer(SharedBuffer::new()).build();
/// use scoped_logger::log_record;
/// log_record!(logger, LogLevel::Info).insert("Simple message").close();
/// log_record!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log_record {
    ($logger:expr, $level:expr) => {
        $logger.record($level, file!(), line!())
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger
            .record($level, file!(), line!())
            .insert(format_args!($($arg)+))
            .close()
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr) => {
        $crate::log_record!($logger, $crate::LogLevel::Debug)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_record!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = Logger::builder().console_writer(SharedBuffer::new()).build();
/// use scoped_logger::log_info;
/// log_info!(logger, "Application started");
/// log_info!(logger).insert("Processing ").insert(100).insert(" items").close();
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr) => {
        $crate::log_record!($logger, $crate::LogLevel::Info)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_record!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr) => {
        $crate::log_record!($logger, $crate::LogLevel::Warn)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_record!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! log_error {
    ($logger:expr) => {
        $crate::log_record!($logger, $crate::LogLevel::Error)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_record!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
