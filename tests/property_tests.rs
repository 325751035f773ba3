//! Property-based tests for rust_level_router using proptest

use proptest::prelude::*;
use rust_level_router::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::DebugNoPrefix),
        Just(LogLevel::Log),
        Just(LogLevel::LogNoPrefix),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn captured(level: i64) -> (LevelRouter, MemoryAppender, MemoryAppender) {
    let out = MemoryAppender::new();
    let err = MemoryAppender::new();
    let router = LevelRouter::builder()
        .stdout(out.clone())
        .stderr(err.clone())
        .terminator(std::sync::Arc::new(|_code: i32| {}))
        .build();
    router.configure_by_level(level, false, false);
    (router, out, err)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>().unwrap(), level);
    }

    /// Test that strings with no level letters never parse
    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[0-9 #%]+") {
        prop_assert!(invalid_str.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Verbosity Tests
// ============================================================================

proptest! {
    /// Out-of-range levels behave like the nearest bound
    #[test]
    fn test_verbosity_clamping(level in any::<i64>(), channel in any_level()) {
        let clamped = Verbosity::from_level(level.clamp(0, 4));
        prop_assert_eq!(Verbosity::from_level(level).admits(channel), clamped.admits(channel));
    }

    /// Raising the level never switches a channel off
    #[test]
    fn test_verbosity_monotonic(level in 0i64..4, channel in any_level()) {
        let lower = Verbosity::from_level(level);
        let higher = Verbosity::from_level(level + 1);
        prop_assert!(!lower.admits(channel) || higher.admits(channel));
    }

    /// Fatal is always admitted
    #[test]
    fn test_fatal_always_admitted(level in any::<i64>()) {
        prop_assert!(Verbosity::from_level(level).admits(LogLevel::Fatal));
    }
}

// ============================================================================
// Routing Tests
// ============================================================================

proptest! {
    /// A message shows up on its channel's destination iff the level admits it
    #[test]
    fn test_emit_routes_by_verbosity(
        level in -10i64..10,
        channel in any_level(),
        message in "[a-zA-Z0-9 ]{1,40}",
    ) {
        let (router, out, err) = captured(level);
        router.emit(channel, &message);

        let (target, other) = match channel {
            LogLevel::Error | LogLevel::Fatal => (&err, &out),
            _ => (&out, &err),
        };

        let admitted = Verbosity::from_level(level).admits(channel);
        prop_assert_eq!(target.lines().len(), usize::from(admitted));
        prop_assert!(other.is_empty());
        if admitted {
            let expected = format!("{}\n", message);
            prop_assert!(target.contents().ends_with(&expected));
        }
    }

    /// Error lines follow the "{context} | {err}" rule
    #[test]
    fn test_error_line_format(context in "[a-z ]{0,20}", detail in "[a-z]{1,20}") {
        let (router, _out, err) = captured(4);
        router.emit_error(&context, &detail);

        let expected = if context.is_empty() {
            format!("{}\n", detail)
        } else {
            format!("{} | {}\n", context, detail)
        };
        prop_assert!(err.contents().ends_with(&expected));
    }
}

// ============================================================================
// Prefix Tests
// ============================================================================

proptest! {
    /// Non-sentinel prefixes are kept verbatim, sentinels pick defaults
    #[test]
    fn test_prefix_resolution(value in ".{0,12}") {
        let p = Prefixes::resolve(&value, &value, &value, &value);
        let defaults = Prefixes::default();

        if value.is_empty() || value == "default" {
            prop_assert_eq!(p, defaults);
        } else {
            prop_assert_eq!(p.debug, value.clone());
            prop_assert_eq!(p.error, value);
        }
    }

    /// Timestamp formats map one-to-one onto the flag pairs
    #[test]
    fn test_timestamp_flags(date in any::<bool>(), time in any::<bool>()) {
        let format = TimestampFormat::from_flags(date, time);
        prop_assert_eq!(format.is_none(), !date && !time);
    }
}
