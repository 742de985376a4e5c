//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and forward to the
//! logger's leveled methods, so call-site capture points at the macro use.
//!
//! # Examples
//!
//! ```
//! use router_logging::prelude::*;
//! use router_logging::info;
//!
//! let logger = Logger::nop();
//!
//! info!(logger, "Router started");
//!
//! let port = 3002;
//! info!(logger, "Listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use router_logging::prelude::*;
/// # let logger = Logger::nop();
/// use router_logging::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Upstream returned {}", 502);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use router_logging::prelude::*;
/// # let logger = Logger::nop();
/// use router_logging::debug;
/// debug!(logger, "Planning took {}ms", 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use router_logging::prelude::*;
/// # let logger = Logger::nop();
/// use router_logging::error;
/// error!(logger, "Subgraph {} unreachable: {}", "products", "connection refused");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
