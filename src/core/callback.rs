//! Interception callbacks
//!
//! An embedding application may register one function that sees every log
//! call before the default output does. Returning `true` marks the call as
//! handled and suppresses the console/file/platform output.

use super::log_level::LogLevel;
use parking_lot::RwLock;
use std::sync::Arc;

/// `(level, message, file, line) -> handled`
pub type InterceptCallback = Arc<dyn Fn(LogLevel, &str, &str, u32) -> bool + Send + Sync>;

/// Source of the (at most one) interception function.
///
/// The logger does not keep the function itself; it asks the provider on
/// every dispatch.
pub trait CallbackProvider: Send + Sync {
    fn callback(&self) -> Option<InterceptCallback>;
}

/// Default provider: a single replaceable slot.
#[derive(Default)]
pub struct CallbackRegistry {
    slot: RwLock<Option<InterceptCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`, replacing any previous one.
    pub fn set<F>(&self, callback: F)
    where
        F: Fn(LogLevel, &str, &str, u32) -> bool + Send + Sync + 'static,
    {
        *self.slot.write() = Some(Arc::new(callback));
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    pub fn is_registered(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl CallbackProvider for CallbackRegistry {
    fn callback(&self) -> Option<InterceptCallback> {
        self.slot.read().clone()
    }
}
