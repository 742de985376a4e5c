//! Property-based tests for router_logging using proptest

use proptest::prelude::*;
use router_logging::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::Panic),
    ]
}

/// Randomly upper- or lower-case each character of `name`
fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Supported names parse in any letter casing
    #[test]
    fn test_parse_level_ignores_case(
        level in any_level(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let name = recase(level.config_name(), &mask);
        prop_assert_eq!(parse_level(&name).unwrap(), level);
    }

    /// Anything that is not a supported name fails with UnknownLevel
    #[test]
    fn test_parse_level_rejects_other_strings(name in "\\PC{0,12}") {
        let supported = ["DEBUG", "INFO", "WARNING", "ERROR", "FATAL", "PANIC"];
        prop_assume!(!supported.contains(&name.to_uppercase().as_str()));

        match parse_level(&name) {
            Err(LoggerError::UnknownLevel { level }) => prop_assert_eq!(level, name),
            other => prop_assert!(false, "expected UnknownLevel, got {:?}", other),
        }
    }

    /// Records at or above the minimum are written, others are dropped
    #[test]
    fn test_level_threshold(min in any_level(), level in any_level()) {
        let capture = MemoryTarget::new();
        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Json, capture.clone(), min))
            .build();

        logger.log(level, "threshold check");
        prop_assert_eq!(capture.lines().len(), usize::from(level >= min));
    }

    /// Every JSON record parses and keeps the message and fields intact
    #[test]
    fn test_json_records_are_valid(
        message in "\\PC*",
        request_id in "[a-zA-Z0-9-]{0,24}",
        level in any_level(),
    ) {
        let capture = MemoryTarget::new();
        let logger = LoggerFactory::new(false, false, LogLevel::Debug)
            .build_with_targets(Box::new(capture.clone()), None);

        logger.log_with_fields(level, message.clone(), vec![with_request_id(request_id.clone())]);

        let lines = capture.lines();
        prop_assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(record["msg"].as_str().unwrap(), message.as_str());
        prop_assert_eq!(record["reqId"].as_str().unwrap(), request_id.as_str());
        prop_assert_eq!(record["level"].as_str().unwrap(), level.as_json_str());
        prop_assert!(record["time"].is_i64());
        prop_assert!(record["hostname"].is_string());
        prop_assert!(record["pid"].is_u64());
    }

    /// Console records stay on a single line unless a stack trace follows
    #[test]
    fn test_console_single_line(message in "\\PC*") {
        let capture = MemoryTarget::new();
        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Console, capture.clone(), LogLevel::Debug))
            .build();

        logger.info(message);
        prop_assert_eq!(capture.lines().len(), 1);
    }
}
