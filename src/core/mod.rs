//! Core logger types and traits

pub mod callback;
pub mod color;
pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;

pub use callback::{CallbackProvider, CallbackRegistry, InterceptCallback};
pub use color::{set_color, ColorMode, ConsoleColor};
pub use config::{LoggerConfig, DEFAULT_TIME_FORMAT};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::{short_file_name, LogRecord};
pub use logger::{global, Logger, LoggerBuilder};
