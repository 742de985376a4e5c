//! Write target trait for log output destinations

use std::io;

/// Byte-stream destination of a sink
///
/// Each call to `write_record` receives one complete encoded record.
pub trait WriteTarget: Send {
    fn write_record(&mut self, record: &[u8]) -> io::Result<()>;

    /// Hand buffered bytes to the underlying stream or file
    fn sync(&mut self) -> io::Result<()>;

    fn name(&self) -> &str;
}
