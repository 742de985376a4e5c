//! # Router Logging
//!
//! Structured logger construction for the router: JSON or colored console
//! output on stdout, optionally teed to a JSON log file.
//!
//! ## Features
//!
//! - **Two formats**: JSON lines with epoch-millisecond timestamps, or console text
//! - **Fan-out**: Every record reaches stdout and the log file
//! - **Base fields**: Hostname and process id on every JSON record
//! - **Thread safe**: Loggers are cheap to clone and share across threads
//!
//! ```
//! use router_logging::prelude::*;
//!
//! let level = parse_level("info").unwrap();
//! let logger = new_logger(false, None, false, level);
//! logger.with([with_request_id("abc123")]).info("request handled");
//! logger.sync().ok();
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod factory;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{open_log_file, FileTarget, MemoryTarget, StdoutTarget};
    pub use crate::config::LoggerConfig;
    pub use crate::core::{
        parse_level, with_request_id, Encoder, Field, FieldValue, Fields, LogEntry, LogLevel,
        Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, WriteTarget,
    };
    pub use crate::factory::{new_logger, BaseFields, LoggerFactory};
}

pub use self::appenders::{open_log_file, FileTarget, MemoryTarget, StdoutTarget};
pub use self::config::LoggerConfig;
pub use self::core::{
    parse_level, with_request_id, Caller, Encoder, Field, FieldValue, Fields, LogEntry, LogLevel,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, Tee, TimestampFormat,
    WriteTarget, REQUEST_ID_FIELD,
};
pub use self::factory::{new_logger, BaseFields, LoggerFactory};
