//! Main logger implementation

use super::{
    error::Result,
    field::{Field, Fields},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
    tee::Tee,
};
use std::backtrace::Backtrace;
use std::panic::Location;
use std::sync::Arc;

/// Handle exposing leveled write methods over one or more sinks
///
/// Cloning is cheap and clones share sinks, base fields and metrics, so a
/// logger can be handed to as many threads as needed.
#[derive(Clone)]
pub struct Logger {
    tee: Arc<Tee>,
    /// Fields rendered by JSON sinks on every record (hostname, pid)
    base: Arc<Fields>,
    /// Fields added through [`Logger::with`]
    context: Fields,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use router_logging::prelude::*;
    ///
    /// let capture = MemoryTarget::new();
    /// let logger = Logger::builder()
    ///     .sink(Sink::new(Encoder::Json, capture.clone(), LogLevel::Debug))
    ///     .add_caller(true)
    ///     .build();
    ///
    /// logger.debug("ready");
    /// assert!(capture.contents().contains(r#""msg":"ready""#));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logger without sinks; every record is discarded
    #[must_use]
    pub fn nop() -> Self {
        LoggerBuilder::new().build()
    }

    /// Derive a child logger whose records also carry `fields`
    ///
    /// ```
    /// use router_logging::prelude::*;
    ///
    /// let capture = MemoryTarget::new();
    /// let logger = Logger::builder()
    ///     .sink(Sink::new(Encoder::Json, capture.clone(), LogLevel::Info))
    ///     .build();
    ///
    /// let request_logger = logger.with([with_request_id("abc123")]);
    /// request_logger.info("handled");
    /// assert!(capture.contents().contains(r#""reqId":"abc123""#));
    /// ```
    #[must_use]
    pub fn with<I: IntoIterator<Item = Field>>(&self, fields: I) -> Logger {
        let mut child = self.clone();
        child.context.extend(fields);
        child
    }

    /// Whether a record at `level` would be written by any sink
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.tee.enabled(level)
    }

    /// Lowest level any sink accepts, `None` without sinks
    pub fn level(&self) -> Option<LogLevel> {
        self.tee.min_level()
    }

    pub fn sinks(&self) -> &[Sink] {
        self.tee.sinks()
    }

    pub fn base_fields(&self) -> &Fields {
        &self.base
    }

    pub fn context(&self) -> &Fields {
        &self.context
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Write a record and return the first sink error
    ///
    /// Records below every sink's level are dropped before encoding.
    #[track_caller]
    pub fn try_log<I>(&self, level: LogLevel, message: impl Into<String>, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = Field>,
    {
        if !self.enabled(level) {
            return Ok(());
        }

        let entry = self.entry(level, message.into(), fields, Location::caller());

        match self.tee.write(&entry, &self.base) {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_dropped();
                Err(e)
            }
        }
    }

    /// Write a record with per-call fields
    ///
    /// Sink failures are reported on stderr and counted in the metrics.
    #[track_caller]
    pub fn log_with_fields<I>(&self, level: LogLevel, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        if let Err(e) = self.try_log(level, message, fields) {
            eprintln!("[LOGGER ERROR] Failed to write {} record: {}", level, e);
        }
    }

    /// Write a record at `level`. Never exits or panics, even for
    /// [`LogLevel::Fatal`] and [`LogLevel::Panic`].
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_with_fields(level, message, Vec::<Field>::new());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at fatal level, sync, then exit the process with status 1
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.log(LogLevel::Fatal, message);
        if let Err(e) = self.sync() {
            eprintln!("[LOGGER ERROR] Failed to sync before exit: {}", e);
        }
        std::process::exit(1)
    }

    /// Log at panic level, sync, then panic with the message
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        self.log(LogLevel::Panic, message.clone());
        if let Err(e) = self.sync() {
            eprintln!("[LOGGER ERROR] Failed to sync before panic: {}", e);
        }
        panic!("{}", message)
    }

    /// Flush every sink, returning the first failure
    pub fn sync(&self) -> Result<()> {
        self.tee.sync().inspect_err(|_| self.metrics.record_sync_failure())
    }

    fn entry<I>(&self, level: LogLevel, message: String, fields: I, location: &Location<'_>) -> LogEntry
    where
        I: IntoIterator<Item = Field>,
    {
        let mut entry = LogEntry::new(level, message)
            .with_fields(self.context.iter().cloned())
            .with_fields(fields);

        if self.add_caller {
            entry = entry.with_caller(location);
        }

        if self.stacktrace_level.is_some_and(|min| level >= min) {
            entry = entry.with_stacktrace(Backtrace::force_capture().to_string());
        }

        entry
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("sinks", &self.tee.sinks())
            .field("base", &self.base)
            .field("context", &self.context)
            .field("add_caller", &self.add_caller)
            .field("stacktrace_level", &self.stacktrace_level)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use router_logging::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(Sink::new(Encoder::Console, StdoutTarget::new(), LogLevel::Info))
///     .stacktrace_level(LogLevel::Error)
///     .build();
/// logger.info("started");
/// ```
pub struct LoggerBuilder {
    sinks: Vec<Sink>,
    base: Fields,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            base: Fields::new(),
            add_caller: false,
            stacktrace_level: None,
        }
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Add a field rendered by JSON sinks on every record
    #[must_use = "builder methods return a new value"]
    pub fn base_field(mut self, field: Field) -> Self {
        self.base.push(field);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn base_fields<I: IntoIterator<Item = Field>>(mut self, fields: I) -> Self {
        self.base.extend(fields);
        self
    }

    /// Capture the call site (`file:line`) of every record
    #[must_use = "builder methods return a new value"]
    pub fn add_caller(mut self, enabled: bool) -> Self {
        self.add_caller = enabled;
        self
    }

    /// Attach a stack trace to records at or above `level`
    #[must_use = "builder methods return a new value"]
    pub fn stacktrace_level(mut self, level: LogLevel) -> Self {
        self.stacktrace_level = Some(level);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            tee: Arc::new(Tee::new(self.sinks)),
            base: Arc::new(self.base),
            context: Fields::new(),
            add_caller: self.add_caller,
            stacktrace_level: self.stacktrace_level,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryTarget;
    use crate::core::encoder::Encoder;
    use crate::core::field::with_request_id;
    use crate::core::target::WriteTarget;

    fn json_logger(level: LogLevel) -> (Logger, MemoryTarget) {
        let capture = MemoryTarget::new();
        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Json, capture.clone(), level))
            .build();
        (logger, capture)
    }

    fn parse_lines(capture: &MemoryTarget) -> Vec<serde_json::Value> {
        capture
            .lines()
            .iter()
            .map(|line| serde_json::from_str(line).expect("valid JSON record"))
            .collect()
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build();
        assert!(logger.sinks().is_empty());
        assert_eq!(logger.level(), None);
        assert!(!logger.enabled(LogLevel::Panic));

        // Writing to a logger without sinks is a no-op
        logger.error("nowhere");
        assert!(logger.sync().is_ok());
    }

    #[test]
    fn test_level_filtering() {
        let (logger, capture) = json_logger(LogLevel::Info);

        logger.debug("This is a debug message");
        logger.info("This is an info message");
        logger.warn("This is a warning message");
        logger.error("This is an error message");

        let records = parse_lines(&capture);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["level"], "info");
        assert_eq!(records[1]["level"], "warn");
        assert_eq!(records[2]["level"], "error");
        assert!(!capture.contents().contains("debug message"));
        assert_eq!(logger.metrics().total_logged(), 3);
    }

    #[test]
    fn test_base_and_context_fields() {
        let capture = MemoryTarget::new();
        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Json, capture.clone(), LogLevel::Debug))
            .base_field(Field::string("hostname", "web-1"))
            .build();

        let child = logger.with([with_request_id("abc123")]);
        child.log_with_fields(LogLevel::Info, "served", vec![Field::int("status", 200)]);
        logger.info("parent");

        let records = parse_lines(&capture);
        assert_eq!(records[0]["hostname"], "web-1");
        assert_eq!(records[0]["reqId"], "abc123");
        assert_eq!(records[0]["status"], 200);
        assert_eq!(records[1]["hostname"], "web-1");
        assert!(records[1].get("reqId").is_none());
        assert_eq!(child.context().len(), 1);
        assert!(logger.context().is_empty());
    }

    #[test]
    fn test_caller_capture() {
        let capture = MemoryTarget::new();
        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Json, capture.clone(), LogLevel::Debug))
            .add_caller(true)
            .build();

        let line = line!() + 1;
        logger.info("located");

        let records = parse_lines(&capture);
        let caller = records[0]["caller"].as_str().expect("caller present");
        assert!(caller.ends_with(&format!("logger.rs:{}", line)), "caller was {}", caller);
    }

    #[test]
    fn test_no_caller_by_default() {
        let (logger, capture) = json_logger(LogLevel::Debug);
        logger.info("anonymous");
        assert!(parse_lines(&capture)[0].get("caller").is_none());
    }

    #[test]
    fn test_stacktrace_on_error_only() {
        let capture = MemoryTarget::new();
        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Json, capture.clone(), LogLevel::Debug))
            .stacktrace_level(LogLevel::Error)
            .build();

        logger.warn("no trace");
        logger.error("with trace");

        let records = parse_lines(&capture);
        assert!(records[0].get("stacktrace").is_none());
        assert!(records[1]["stacktrace"].is_string());
    }

    #[test]
    fn test_try_log_reports_failure() {
        struct ClosedTarget;

        impl WriteTarget for ClosedTarget {
            fn write_record(&mut self, _record: &[u8]) -> std::io::Result<()> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn sync(&mut self) -> std::io::Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "closed"
            }
        }

        let logger = Logger::builder()
            .sink(Sink::new(Encoder::Json, ClosedTarget, LogLevel::Info))
            .build();

        assert!(logger.try_log(LogLevel::Info, "lost", Vec::<Field>::new()).is_err());
        // Filtered records never reach the sink
        assert!(logger.try_log(LogLevel::Debug, "filtered", Vec::<Field>::new()).is_ok());

        logger.info("also lost");
        assert_eq!(logger.metrics().dropped_count(), 2);
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    #[should_panic(expected = "unrecoverable state")]
    fn test_panic_logs_then_panics() {
        let (logger, _capture) = json_logger(LogLevel::Info);
        logger.panic("unrecoverable state");
    }

    #[test]
    fn test_panic_record_written() {
        let (logger, capture) = json_logger(LogLevel::Info);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("invariant broken");
        }));

        assert!(result.is_err());
        let records = parse_lines(&capture);
        assert_eq!(records[0]["level"], "panic");
        assert_eq!(records[0]["msg"], "invariant broken");
    }

    #[test]
    fn test_concurrent_records_do_not_interleave() {
        let (logger, capture) = json_logger(LogLevel::Info);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let logger = logger.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        logger.log_with_fields(
                            LogLevel::Info,
                            format!("thread {} message {}", t, i),
                            vec![Field::int("thread", t)],
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("logging thread panicked");
        }

        let records = parse_lines(&capture);
        assert_eq!(records.len(), 800);
        assert_eq!(logger.metrics().total_logged(), 800);
    }
}
