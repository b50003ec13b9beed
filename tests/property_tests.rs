//! Property-based tests for scoped_logger using proptest

use proptest::prelude::*;
use scoped_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

// ============================================================================
// File Name Tests
// ============================================================================

proptest! {
    /// The directory prefix is always removed, whatever it is
    #[test]
    fn test_short_file_name_strips_dirs(
        dirs in prop::collection::vec("[a-zA-Z0-9_.-]{1,8}", 0..5),
        name in "[a-zA-Z0-9_-]{1,12}\\.(rs|cpp|h)",
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&name);
        prop_assert_eq!(short_file_name(&path), name.as_str());
        let absolute = format!("/{}", path);
        prop_assert_eq!(short_file_name(&absolute), name.as_str());
    }

    /// A name without separators is returned unchanged
    #[test]
    fn test_short_file_name_identity(name in "[^/\\\\]{0,20}") {
        prop_assert_eq!(short_file_name(&name), name.as_str());
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Parsing the display form gives back the same level, in any case
    #[test]
    fn test_log_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let text = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        let parsed: LogLevel = text.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Every emitted line has the same tag width regardless of level
    #[test]
    fn test_tag_width_constant(level in any_level(), message in "[a-z ]{0,30}", line in 0u32..100_000) {
        let console = SharedBuffer::new();
        let logger = Logger::builder()
            .console_writer(console.clone())
            .color_mode(ColorMode::Never)
            .without_platform_logger()
            .build();

        logger.record(level, "p.rs", line).insert(&message).close();

        let out = console.contents();
        prop_assert_eq!(out.find(']'), Some(15));
        let expected_tail = format!("] {} (p.rs:{})\n", message, line);
        prop_assert!(out.ends_with(&expected_tail));
    }
}
