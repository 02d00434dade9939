//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use confset_edit::DEFAULT_NEWLINE;
use fs2::FileExt;

use crate::{Error, Result};

/// Read a file into a string.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Temp file in the same directory, so the rename stays on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    // Release lock (implicit on drop, but be explicit)
    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Create an empty file if nothing exists at `path`.
pub fn create_if_missing(path: &Path) -> Result<()> {
    if !path.exists() {
        write_atomic(path, b"")?;
    }
    Ok(())
}

/// Append one line to a file, keeping it terminator-clean.
///
/// The result is always `existing lines + line + newline`; a file that did
/// not end with a terminator gets one before the new line.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut data = read(path)?;
    if !data.is_empty() && !data.ends_with(DEFAULT_NEWLINE) {
        data.push_str(DEFAULT_NEWLINE);
    }
    data.push_str(line);
    data.push_str(DEFAULT_NEWLINE);
    write_atomic(path, data.as_bytes())
}
