//! Fan-out of records to several sinks

use super::error::Result;
use super::field::Fields;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::sink::Sink;

/// Every record written to a tee is offered to each of its sinks in order.
///
/// A failing sink does not stop delivery to the others and is not removed;
/// the first error is returned to the caller.
#[derive(Debug, Default)]
pub struct Tee {
    sinks: Vec<Sink>,
}

impl Tee {
    pub fn new(sinks: Vec<Sink>) -> Self {
        Self { sinks }
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Lowest level accepted by any sink
    pub fn min_level(&self) -> Option<LogLevel> {
        self.sinks.iter().map(Sink::min_level).min()
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.sinks.iter().any(|sink| sink.enabled(level))
    }

    pub fn write(&self, entry: &LogEntry, base: &Fields) -> Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.write(entry, base) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    pub fn sync(&self) -> Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.sync() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
