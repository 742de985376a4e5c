//! In-memory target for capturing output

use crate::core::WriteTarget;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Shared byte buffer; clones observe the same contents
///
/// Useful to capture what a logger would have written to standard output.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl WriteTarget for MemoryTarget {
    fn write_record(&mut self, record: &[u8]) -> io::Result<()> {
        self.buffer.lock().extend_from_slice(record);
        Ok(())
    }

    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
