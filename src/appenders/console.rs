//! Standard output target

use crate::core::WriteTarget;
use std::io::{self, Write};

/// Writes records to the process's standard output
///
/// The stdout lock is held for the whole record so records from other
/// writers in the process cannot split it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTarget;

impl StdoutTarget {
    pub fn new() -> Self {
        Self
    }
}

impl WriteTarget for StdoutTarget {
    fn write_record(&mut self, record: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(record)
    }

    fn sync(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
