//! Write target implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::StdoutTarget;
pub use file::{log_root, open_log_file, open_log_file_in, FileTarget, LOG_FILE_NAME};
pub use memory::MemoryTarget;

pub use crate::core::WriteTarget;
