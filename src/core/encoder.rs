//! Record encoders
//!
//! Two formats are supported:
//! - Json: one object per line with an epoch-millisecond `time`
//! - Console: space-separated text with a colored level and a clock time

use super::error::Result;
use super::field::Fields;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "msg";
pub const CALLER_KEY: &str = "caller";
pub const STACKTRACE_KEY: &str = "stacktrace";

/// Prefix given to a field whose key is already taken in the record
pub const FIELD_KEY_PREFIX: &str = "fields.";

const RESERVED_KEYS: [&str; 5] = [LEVEL_KEY, TIME_KEY, CALLER_KEY, MESSAGE_KEY, STACKTRACE_KEY];

/// Output format of a sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoder {
    /// Machine-readable JSON
    ///
    /// Example: `{"level":"info","time":1736332245123,"msg":"ready","hostname":"web-1","pid":42}`
    #[default]
    Json,

    /// Human-readable console text
    ///
    /// Example: `10:30:45 AM INFO ready {"reqId":"abc123"}`
    Console,
}

impl Encoder {
    /// Pick the encoder for the stdout side of a logger
    pub fn for_console(pretty: bool) -> Self {
        if pretty {
            Encoder::Console
        } else {
            Encoder::Json
        }
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        match self {
            Encoder::Json => TimestampFormat::UnixMillis,
            Encoder::Console => TimestampFormat::Clock,
        }
    }

    /// Encode a record as a newline-terminated line
    ///
    /// `base` holds the logger-wide fields; the console encoder omits them.
    /// A field never replaces a record key or an earlier field: a colliding
    /// key is written again under [`FIELD_KEY_PREFIX`].
    pub fn encode(&self, entry: &LogEntry, base: &Fields) -> Result<String> {
        match self {
            Encoder::Json => self.encode_json(entry, base),
            Encoder::Console => self.encode_console(entry),
        }
    }

    fn encode_json(&self, entry: &LogEntry, base: &Fields) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            LEVEL_KEY.to_string(),
            serde_json::Value::String(entry.level.as_json_str().to_string()),
        );
        json_obj.insert(
            TIME_KEY.to_string(),
            self.timestamp_format().to_json_value(&entry.timestamp),
        );
        if let Some(ref caller) = entry.caller {
            json_obj.insert(
                CALLER_KEY.to_string(),
                serde_json::Value::String(caller.to_string()),
            );
        }
        json_obj.insert(
            MESSAGE_KEY.to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        for field in base.iter().chain(entry.fields.iter()) {
            let key = free_key(&json_obj, &field.key, &RESERVED_KEYS);
            json_obj.insert(key, field.value.to_json_value());
        }

        if let Some(ref stacktrace) = entry.stacktrace {
            json_obj.insert(
                STACKTRACE_KEY.to_string(),
                serde_json::Value::String(stacktrace.clone()),
            );
        }

        let mut line = serde_json::to_string(&serde_json::Value::Object(json_obj))?;
        line.push('\n');
        Ok(line)
    }

    fn encode_console(&self, entry: &LogEntry) -> Result<String> {
        let mut parts = Vec::with_capacity(5);

        parts.push(self.timestamp_format().format(&entry.timestamp));
        parts.push(level_token(entry));
        if let Some(ref caller) = entry.caller {
            parts.push(caller.to_string());
        }
        parts.push(entry.single_line_message());

        if !entry.fields.is_empty() {
            let mut fields = serde_json::Map::new();
            for field in entry.fields.iter() {
                let key = free_key(&fields, &field.key, &[]);
                fields.insert(key, field.value.to_json_value());
            }
            parts.push(serde_json::to_string(&serde_json::Value::Object(fields))?);
        }

        let mut line = parts.join(" ");
        if let Some(ref stacktrace) = entry.stacktrace {
            line.push('\n');
            line.push_str(stacktrace.trim_end());
        }
        line.push('\n');
        Ok(line)
    }
}

fn free_key(taken: &serde_json::Map<String, serde_json::Value>, key: &str, reserved: &[&str]) -> String {
    let mut key = key.to_string();
    while taken.contains_key(&key) || reserved.contains(&key.as_str()) {
        key.insert_str(0, FIELD_KEY_PREFIX);
    }
    key
}

#[cfg(feature = "console")]
fn level_token(entry: &LogEntry) -> String {
    use colored::Colorize;
    entry
        .level
        .to_str()
        .color(entry.level.color_code())
        .to_string()
}

#[cfg(not(feature = "console"))]
fn level_token(entry: &LogEntry) -> String {
    entry.level.to_str().to_string()
}
