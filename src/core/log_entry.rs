//! Log entry structure

use super::field::{Field, Fields};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::Location;

/// Call site of a log statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub file: String,
    pub line: u32,
}

impl Caller {
    pub fn from_location(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

impl std::fmt::Display for Caller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<Caller>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
    /// Context fields of the issuing logger followed by per-call fields
    pub fields: Fields,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            caller: None,
            stacktrace: None,
            fields: Fields::new(),
        }
    }

    pub fn with_caller(mut self, location: &Location<'_>) -> Self {
        self.caller = Some(Caller::from_location(location));
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: impl Into<String>) -> Self {
        self.stacktrace = Some(stacktrace.into());
        self
    }

    pub fn with_fields<I: IntoIterator<Item = Field>>(mut self, fields: I) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Message with line breaks and tabs escaped so a record stays on one line
    pub fn single_line_message(&self) -> String {
        self.message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults() {
        let entry = LogEntry::new(LogLevel::Info, "started");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "started");
        assert!(entry.caller.is_none());
        assert!(entry.stacktrace.is_none());
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_caller_from_location() {
        let entry = LogEntry::new(LogLevel::Debug, "here").with_caller(Location::caller());
        let caller = entry.caller.expect("caller captured");
        assert!(caller.file.ends_with("log_entry.rs"));
        assert!(caller.line > 0);
        assert_eq!(caller.to_string(), format!("{}:{}", caller.file, caller.line));
    }

    #[test]
    fn test_single_line_message() {
        let entry = LogEntry::new(LogLevel::Warn, "line one\nERROR fake\tentry\r");
        assert_eq!(entry.single_line_message(), "line one\\nERROR fake\\tentry\\r");
        assert_eq!(entry.message, "line one\nERROR fake\tentry\r");
    }
}
