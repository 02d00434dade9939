//! Command dispatch: maps parsed arguments onto the file collaborator.

use std::path::Path;

use confset_edit::{ASSIGNMENTS, extract_key};

use crate::error::{CliError, Result};

/// Replace a key's value. `key_or_pair` is either a bare key with `value`
/// supplied separately, or a `key=value` pair. An end marker switches the
/// bare-key form to bounded multi-line replacement.
pub fn run_set(
    file: &Path,
    key_or_pair: &str,
    value: Option<&str>,
    end_marker: Option<&str>,
) -> Result<()> {
    match value {
        Some(value) if end_marker.is_some() => {
            confset_fs::change_file_multiline(file, key_or_pair, value, end_marker)?;
        }
        Some(value) => {
            confset_fs::change_file(file, key_or_pair, value, false)?;
        }
        None => {
            let (key, value) = key_or_pair.split_once('=').ok_or_else(|| {
                CliError::user(format!("expected key=value, got `{key_or_pair}`"))
            })?;
            confset_fs::change_file(file, key, value, false)?;
        }
    }
    Ok(())
}

/// Replace a key's value, appending the option when nothing matches.
/// The appended line keeps the operator spelling the user typed.
pub fn run_add(file: &Path, key_or_pair: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => {
            let line = format!("{key_or_pair}={value}");
            confset_fs::set_or_add(file, key_or_pair, value, &line)?;
        }
        None => {
            let (key, value) = split_pair(key_or_pair).ok_or_else(|| {
                CliError::user(format!(
                    "expected key and value separated by an assignment, got `{key_or_pair}`"
                ))
            })?;
            confset_fs::set_or_add(file, key, value, key_or_pair)?;
        }
    }
    Ok(())
}

/// Split a `key<operator>value` pair for add mode: the value is whatever
/// follows the first operator found in table order, the key is the trimmed
/// fragment before the leftmost operator.
fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let token = ASSIGNMENTS.into_iter().find(|t| pair.contains(t))?;
    let value = &pair[pair.find(token)? + token.len()..];
    let key = extract_key(pair, false)?.trim();
    Some((key, value))
}
