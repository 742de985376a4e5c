//! Timestamp formatting utilities
//!
//! JSON records carry integer epoch milliseconds; console records carry a
//! local wall-clock time.

use chrono::{DateTime, Local, Utc};

/// strftime layout of the console clock: 24-hour time followed by AM/PM
pub const CLOCK_LAYOUT: &str = "%H:%M:%S %p";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use router_logging::core::TimestampFormat;
/// use chrono::Utc;
///
/// let millis = TimestampFormat::UnixMillis.format(&Utc::now());
/// assert!(millis.parse::<i64>().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Unix timestamp in milliseconds: `1736332245123`
    ///
    /// Sub-millisecond precision is truncated.
    #[default]
    UnixMillis,

    /// Local clock time: `10:30:45 AM`
    Clock,
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Clock => datetime
                .with_timezone(&Local)
                .format(CLOCK_LAYOUT)
                .to_string(),
        }
    }

    /// Render as a JSON value: a number for epoch millis, a string for the clock
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            TimestampFormat::Clock => serde_json::Value::String(self.format(datetime)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_unix_millis_truncates() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime());
        assert_eq!(result, "1736332245123");
        assert_eq!(
            TimestampFormat::UnixMillis.to_json_value(&fixed_datetime()),
            serde_json::json!(1736332245123i64)
        );
    }

    #[test]
    fn test_clock_shape() {
        let result = TimestampFormat::Clock.format(&fixed_datetime());
        // "HH:MM:SS AM" or "HH:MM:SS PM"
        assert_eq!(result.len(), 11);
        assert!(result.ends_with(" AM") || result.ends_with(" PM"));
        assert_eq!(&result[2..3], ":");
        assert_eq!(&result[5..6], ":");
        assert!(result[..2].parse::<u32>().unwrap() < 24);
    }

    #[test]
    fn test_clock_json_value_is_string() {
        let value = TimestampFormat::Clock.to_json_value(&fixed_datetime());
        assert!(value.is_string());
    }

    #[test]
    fn test_default_is_unix_millis() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::UnixMillis);
    }
}
