//! I/O utility functions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `state.json` -> `state.json.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename.
///
/// An interrupted save leaves either the old file or the new one, never a
/// truncated mix.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("consensus.json"), &json)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp = temp_path(path);
    fs::write(&temp, content)?;
    fs::rename(&temp, path)
}
