//! Logging options as read from configuration

use crate::appenders::open_log_file;
use crate::core::{parse_level, LogLevel, Logger, LoggerError, Result};
use crate::factory::LoggerFactory;
use serde::{Deserialize, Serialize};

/// Options accepted from a configuration file or environment
///
/// ```
/// use router_logging::LoggerConfig;
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"level": "warning"}"#).unwrap();
/// assert!(!config.pretty_logging);
/// let logger = config.build().unwrap();
/// logger.warn("configured");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console text instead of JSON on stdout
    pub pretty_logging: bool,
    /// Capture the call site of every record
    pub debug: bool,
    /// Level name, matched without regard to case
    pub level: String,
    /// Directory receiving `router_log.json`; empty disables the file
    pub file_destination: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            pretty_logging: false,
            debug: false,
            level: LogLevel::Info.config_name().to_string(),
            file_destination: String::new(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn pretty_logging(mut self, pretty: bool) -> Self {
        self.pretty_logging = pretty;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_destination(mut self, destination: impl Into<String>) -> Self {
        self.file_destination = destination.into();
        self
    }

    /// Parsed minimum level
    pub fn min_level(&self) -> Result<LogLevel> {
        if self.level.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "level must not be empty"));
        }
        parse_level(&self.level)
    }

    pub fn factory(&self) -> Result<LoggerFactory> {
        Ok(LoggerFactory::new(self.pretty_logging, self.debug, self.min_level()?))
    }

    /// Parse the level, open the log file and build the logger
    pub fn build(&self) -> Result<Logger> {
        let factory = self.factory()?;
        let log_file = open_log_file(&self.file_destination)?;
        Ok(factory.build(log_file))
    }
}
