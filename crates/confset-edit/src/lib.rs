//! Pure buffer transforms for confset
//!
//! Rewrites `key <assignment> value` lines in configuration files while
//! preserving surrounding formatting, comments, and unrelated lines.
//! Everything here is a pure function from input text to output text:
//! no I/O, no shared state. A missing key or end marker is not an error,
//! it is a no-op signalled by returning the input unchanged.

pub mod line;
pub mod span;
pub mod token;

pub use line::{extract_key, rewrite_line};
pub use span::{DEFAULT_NEWLINE, SpanOptions, apply_to_all_matching_lines, replace_span};
pub use token::{ASSIGNMENTS, find_assignment};
