//! Android `liblog` backend

use super::{PlatformLogger, PlatformPriority};
use android_log_sys::{LogPriority, __android_log_write};
use std::ffi::CString;
use std::os::raw::c_int;

pub struct AndroidLogger;

impl AndroidLogger {
    fn to_c_string(text: &str) -> CString {
        // Interior NULs would truncate the message on the C side.
        CString::new(text.replace('\0', "\\0")).unwrap_or_default()
    }
}

impl PlatformLogger for AndroidLogger {
    fn write(&self, priority: PlatformPriority, tag: &str, message: &str) {
        let prio = match priority {
            PlatformPriority::Debug => LogPriority::DEBUG,
            PlatformPriority::Info => LogPriority::INFO,
            PlatformPriority::Warn => LogPriority::WARN,
            PlatformPriority::Error => LogPriority::ERROR,
        };
        let tag = Self::to_c_string(tag);
        let text = Self::to_c_string(message);

        // SAFETY: both pointers come from live, NUL-terminated CStrings.
        unsafe {
            __android_log_write(prio as c_int, tag.as_ptr(), text.as_ptr());
        }
    }
}
