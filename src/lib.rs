//! # Scoped Logger
//!
//! A severity-leveled logging facility built around scoped log records.
//!
//! ## Features
//!
//! - **Line-Atomic**: A record holds the logger's lock from creation to
//!   dispatch, so concurrent lines never interleave
//! - **Sinks**: Colorized console by default, or an appended log file
//! - **Interception**: An embedding application can observe and suppress lines
//! - **Platform Log**: On Android, lines go to the native log service
//!
//! ## Example
//!
//! ```
//! use scoped_logger::{log_info, log_warn, ColorMode, Logger, SharedBuffer};
//!
//! let console = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .console_writer(console.clone())
//!     .color_mode(ColorMode::Never)
//!     .build();
//!
//! log_info!(logger, "starting {} workers", 4);
//! log_warn!(logger).insert("queue depth ").insert(17).close();
//!
//! assert_eq!(console.lines().len(), 2);
//! ```

pub mod core;
pub mod macros;
pub mod platform;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global, short_file_name, CallbackProvider, CallbackRegistry, ColorMode, ConsoleColor,
        InterceptCallback, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        Result,
    };
    pub use crate::platform::{PlatformLogger, PlatformPriority};
    pub use crate::sinks::{SharedBuffer, SinkKind};
}

pub use crate::core::{
    global, set_color, short_file_name, CallbackProvider, CallbackRegistry, ColorMode,
    ConsoleColor, InterceptCallback, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Result, DEFAULT_TIME_FORMAT,
};
pub use platform::{PlatformLogger, PlatformPriority, DEFAULT_PLATFORM_TAG};
pub use sinks::{ConsoleWriter, FileSink, SharedBuffer, SinkKind, SinkManager};
