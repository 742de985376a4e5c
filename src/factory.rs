//! Logger construction from the router's logging options
//!
//! Without a log file the logger has a single stdout sink. With one, every
//! record is also written to the file, which always receives JSON.

use crate::appenders::{FileTarget, StdoutTarget};
use crate::core::{Encoder, Field, Fields, LogLevel, Logger, Sink, WriteTarget};
use std::fs::File;

pub const HOSTNAME_FIELD: &str = "hostname";
pub const PID_FIELD: &str = "pid";

/// Hostname substituted when the lookup fails
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Process-identifying fields attached to JSON records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFields {
    pub hostname: String,
    pub pid: u32,
}

impl BaseFields {
    /// Look up the hostname and process id of the running process
    pub fn detect() -> Self {
        let hostname = gethostname::gethostname()
            .into_string()
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string());

        Self {
            hostname,
            pid: std::process::id(),
        }
    }

    pub fn to_fields(&self) -> Fields {
        Fields::from(vec![
            Field::string(HOSTNAME_FIELD, self.hostname.clone()),
            Field::new(PID_FIELD, self.pid),
        ])
    }
}

/// Builds loggers for one set of options
///
/// # Example
///
/// ```
/// use router_logging::{LogLevel, LoggerFactory};
///
/// let logger = LoggerFactory::new(false, false, LogLevel::Info).build(None);
/// logger.info("router started");
/// logger.sync().ok();
/// ```
#[derive(Debug, Clone)]
pub struct LoggerFactory {
    pretty: bool,
    debug: bool,
    level: LogLevel,
    base: BaseFields,
}

impl LoggerFactory {
    /// `pretty` selects console text over JSON for stdout, `debug` enables
    /// call-site capture and `level` is the minimum severity written.
    pub fn new(pretty: bool, debug: bool, level: LogLevel) -> Self {
        Self {
            pretty,
            debug,
            level,
            base: BaseFields::detect(),
        }
    }

    /// Replace the detected base fields
    #[must_use]
    pub fn with_base_fields(mut self, base: BaseFields) -> Self {
        self.base = base;
        self
    }

    pub fn base_fields(&self) -> &BaseFields {
        &self.base
    }

    /// Build a logger writing to stdout and, when given, to `log_file`
    pub fn build(&self, log_file: Option<File>) -> Logger {
        self.build_with_targets(
            Box::new(StdoutTarget::new()),
            log_file.map(|file| Box::new(FileTarget::new(file)) as Box<dyn WriteTarget>),
        )
    }

    /// Build a logger over arbitrary console and file targets
    pub fn build_with_targets(
        &self,
        console: Box<dyn WriteTarget>,
        file: Option<Box<dyn WriteTarget>>,
    ) -> Logger {
        let mut builder = Logger::builder()
            .sink(Sink::boxed(Encoder::for_console(self.pretty), console, self.level))
            .add_caller(self.debug)
            .stacktrace_level(LogLevel::Error)
            .base_fields(self.base.to_fields());

        if let Some(file) = file {
            builder = builder.sink(Sink::boxed(Encoder::Json, file, self.level));
        }

        builder.build()
    }
}

/// Build a logger in one call: stdout, plus `log_file` when present.
pub fn new_logger(pretty: bool, log_file: Option<File>, debug: bool, level: LogLevel) -> Logger {
    LoggerFactory::new(pretty, debug, level).build(log_file)
}
