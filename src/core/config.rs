//! Logger configuration
//!
//! Serializable settings that can be loaded from JSON and fed into
//! [`LoggerBuilder::from_config`](super::LoggerBuilder::from_config).

use super::color::ColorMode;
use super::error::{LoggerError, Result};
use crate::platform::DEFAULT_PLATFORM_TAG;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Default strftime pattern for the timestamp inside the level tag (12-hour clock).
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Append log lines to this file instead of the console
    pub log_file: Option<PathBuf>,
    pub color: ColorMode,
    pub time_format: String,
    pub platform_tag: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            color: ColorMode::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            platform_tag: DEFAULT_PLATFORM_TAG.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoped_logger::{ColorMode, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_json_str(r#"{ "color": "never" }"#).unwrap();
    /// assert_eq!(config.color, ColorMode::Never);
    /// assert_eq!(config.time_format, "%H:%M:%S");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_time_format(&self.time_format)?;
        if self.platform_tag.is_empty() {
            return Err(LoggerError::config("platform_tag", "tag must not be empty"));
        }
        Ok(())
    }
}

/// Format `time` with `format`, falling back to [`DEFAULT_TIME_FORMAT`] when
/// the pattern cannot be rendered.
pub(crate) fn format_time(time: &NaiveDateTime, format: &str) -> String {
    let mut out = String::with_capacity(8);
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_TIME_FORMAT));
    }
    out
}

pub(crate) fn validate_time_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(LoggerError::config("time_format", "format must not be empty"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::config(
            "time_format",
            format!("'{}' is not a valid strftime pattern", format),
        ));
    }
    Ok(())
}
