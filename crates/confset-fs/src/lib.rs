//! File collaborator for confset
//!
//! The pure transforms in `confset-edit` never touch storage; this crate
//! owns the read-transform-write cycle around them: atomic writes,
//! create-if-missing, dry-run change detection, and append-if-absent.

pub mod apply;
pub mod error;
pub mod io;

pub use apply::{change_file, change_file_multiline, set_or_add};
pub use error::{Error, Result};
pub use io::{append_line, create_if_missing, read, write_atomic};
