//! Sink: an encoder, a write target and a level filter

use super::encoder::Encoder;
use super::error::{LoggerError, Result};
use super::field::Fields;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::target::WriteTarget;
use parking_lot::Mutex;

pub struct Sink {
    encoder: Encoder,
    min_level: LogLevel,
    target: Mutex<Box<dyn WriteTarget>>,
}

impl Sink {
    pub fn new<T: WriteTarget + 'static>(encoder: Encoder, target: T, min_level: LogLevel) -> Self {
        Self::boxed(encoder, Box::new(target), min_level)
    }

    pub fn boxed(encoder: Encoder, target: Box<dyn WriteTarget>, min_level: LogLevel) -> Self {
        Self {
            encoder,
            min_level,
            target: Mutex::new(target),
        }
    }

    pub fn encoder(&self) -> Encoder {
        self.encoder
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn target_name(&self) -> String {
        self.target.lock().name().to_string()
    }

    /// Encode and write one record
    ///
    /// The record is encoded before the target lock is taken and written
    /// with a single call, so concurrent records never interleave.
    pub fn write(&self, entry: &LogEntry, base: &Fields) -> Result<()> {
        if !self.enabled(entry.level) {
            return Ok(());
        }

        let line = self.encoder.encode(entry, base)?;

        let mut target = self.target.lock();
        target.write_record(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing log record", target.name().to_string(), e)
        })
    }

    pub fn sync(&self) -> Result<()> {
        let mut target = self.target.lock();
        target
            .sync()
            .map_err(|e| LoggerError::io_operation("syncing log target", target.name().to_string(), e))
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("encoder", &self.encoder)
            .field("min_level", &self.min_level)
            .field("target", &self.target_name())
            .finish()
    }
}
