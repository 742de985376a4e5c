//! Core logger types and traits

pub mod encoder;
pub mod error;
pub mod field;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod target;
pub mod tee;
pub mod timestamp;

pub use encoder::Encoder;
pub use error::{LoggerError, Result};
pub use field::{with_request_id, Field, FieldValue, Fields, REQUEST_ID_FIELD};
pub use log_entry::{Caller, LogEntry};
pub use log_level::{parse_level, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use target::WriteTarget;
pub use tee::Tee;
pub use timestamp::TimestampFormat;
