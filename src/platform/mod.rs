//! Native platform log service
//!
//! On mobile targets log lines are handed to the operating system's log
//! service instead of a console or file. Only the message text is sent,
//! tagged with a fixed application tag and a priority derived from the level.

#[cfg(target_os = "android")]
pub mod android;

#[cfg(target_os = "android")]
pub use android::AndroidLogger;

/// Tag attached to every message sent to the platform log service.
pub const DEFAULT_PLATFORM_TAG: &str = "scoped_logger";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformPriority {
    Debug,
    Info,
    Warn,
    Error,
}

pub trait PlatformLogger: Send + Sync {
    fn write(&self, priority: PlatformPriority, tag: &str, message: &str);
}

/// The platform logger used when none is configured explicitly.
///
/// `Some` only on targets with a native log service.
pub fn default_platform_logger() -> Option<Box<dyn PlatformLogger>> {
    #[cfg(target_os = "android")]
    {
        Some(Box::new(AndroidLogger))
    }
    #[cfg(not(target_os = "android"))]
    {
        None
    }
}
