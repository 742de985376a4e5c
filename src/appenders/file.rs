//! File target and log file resolution

use crate::core::{LoggerError, Result, WriteTarget};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name created inside the destination directory
pub const LOG_FILE_NAME: &str = "router_log.json";

/// Writes records to a caller-supplied file
pub struct FileTarget {
    writer: BufWriter<File>,
}

impl FileTarget {
    pub fn new(file: File) -> Self {
        Self {
            writer: BufWriter::new(file),
        }
    }
}

impl WriteTarget for FileTarget {
    fn write_record(&mut self, record: &[u8]) -> io::Result<()> {
        self.writer.write_all(record)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileTarget {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.writer.flush();
    }
}

/// Directory the destination is resolved against: two levels above the
/// directory holding this source file, i.e. the crate root.
pub fn log_root() -> PathBuf {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join(file!());
    let source_dir = source.parent().unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")));
    source_dir.join("../..")
}

/// Open `router_log.json` inside `destination` for appending.
///
/// An empty destination means "no log file" and yields `Ok(None)`. Other
/// destinations are resolved against [`log_root`]; an absolute destination
/// is used as is. The directory must already exist.
pub fn open_log_file(destination: &str) -> Result<Option<File>> {
    open_log_file_in(log_root(), destination)
}

/// Same as [`open_log_file`] with an explicit base directory
pub fn open_log_file_in(base: impl AsRef<Path>, destination: &str) -> Result<Option<File>> {
    if destination.is_empty() {
        return Ok(None);
    }

    let path = base.as_ref().join(destination).join(LOG_FILE_NAME);

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options
        .open(&path)
        .map(Some)
        .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))
}
