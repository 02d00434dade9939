//! Read-transform-write cycles around the pure buffer transforms.

use std::path::Path;

use confset_edit::{DEFAULT_NEWLINE, SpanOptions, apply_to_all_matching_lines, replace_span};
use tracing::debug;

use crate::io::{append_line, create_if_missing, read, write_atomic};
use crate::Result;

/// Replace `key`'s value on every matching line of the file.
///
/// With `dry_run` set, nothing is written. Returns whether the transform
/// produced output different from the file's current content, so callers
/// can detect "nothing to do" before committing.
pub fn change_file(path: &Path, key: &str, value: &str, dry_run: bool) -> Result<bool> {
    let data = read(path)?;
    let changed = apply_to_all_matching_lines(&data, key, value, DEFAULT_NEWLINE);
    let differs = changed != data;
    if differs && !dry_run {
        write_atomic(path, changed.as_bytes())?;
    }
    Ok(differs)
}

/// Replace one span of the file, bounded by `end_marker`.
///
/// Without an end marker this is single-line mode. Returns whether the
/// file was changed; a missing key or end marker is a no-op, not an error.
pub fn change_file_multiline(
    path: &Path,
    key: &str,
    value: &str,
    end_marker: Option<&str>,
) -> Result<bool> {
    let data = read(path)?;
    let opts = match end_marker {
        Some(marker) => SpanOptions::with_end_marker(marker),
        None => SpanOptions::new(),
    };
    let changed = replace_span(&data, key, value, &opts);
    let differs = changed != data;
    if differs {
        write_atomic(path, changed.as_bytes())?;
    }
    Ok(differs)
}

/// Replace `key`'s value, or append `line` when no existing line matches.
///
/// Creates the file first if it does not exist. `line` is the literal
/// record to append (callers keep the operator spelling the user typed,
/// e.g. `Z:=567`). An exact copy of `line` already present in the file
/// suppresses the append, so repeated adds stay idempotent.
pub fn set_or_add(path: &Path, key: &str, value: &str, line: &str) -> Result<()> {
    create_if_missing(path)?;
    if change_file(path, key, value, true)? {
        change_file(path, key, value, false)?;
        return Ok(());
    }
    let data = read(path)?;
    if data.contains(line) {
        debug!(line, "line already present, nothing to add");
        return Ok(());
    }
    append_line(path, line)
}
