//! Buffer-level replacement: whole-buffer key rewriting and bounded
//! multi-line span replacement.

use std::borrow::Cow;

use tracing::debug;

use crate::line::{extract_key, rewrite_line};

/// Line terminator used when callers do not supply one.
pub const DEFAULT_NEWLINE: &str = "\n";

/// Options for [`replace_span`].
#[derive(Debug, Clone, Copy)]
pub struct SpanOptions<'a> {
    /// Marker ending a multi-line value. `None` means single-line mode:
    /// the span ends at the next line terminator.
    pub end_marker: Option<&'a str>,
    /// Byte offset to start searching for the key from.
    pub search_from: usize,
    /// Line terminator used for span boundaries.
    pub newline: &'a str,
}

impl Default for SpanOptions<'_> {
    fn default() -> Self {
        Self {
            end_marker: None,
            search_from: 0,
            newline: DEFAULT_NEWLINE,
        }
    }
}

impl<'a> SpanOptions<'a> {
    /// Single-line mode with default terminator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-line mode bounded by `marker`.
    pub fn with_end_marker(marker: &'a str) -> Self {
        Self {
            end_marker: Some(marker),
            ..Self::default()
        }
    }
}

/// Replace the value of every line assigning `key`.
///
/// The buffer is split on `newline` and reassembled with it, so every line
/// that is not an exact key match (after trimming the key fragment) comes
/// back byte-identical, including malformed and commented lines. All
/// matching lines are rewritten, not just the first.
pub fn apply_to_all_matching_lines(buffer: &str, key: &str, value: &str, newline: &str) -> String {
    let lines: Vec<Cow<'_, str>> = buffer
        .split(newline)
        .map(|line| {
            if line.trim().is_empty() {
                return Cow::Borrowed(line);
            }
            match extract_key(line, false) {
                Some(fragment) if fragment.trim() == key => rewrite_line(line, value),
                _ => Cow::Borrowed(line),
            }
        })
        .collect();
    lines.join(newline)
}

/// Replace one span assigning `key`, bounded by an end marker.
///
/// In single-line mode the span runs from the start of the matched line
/// through the next terminator. With an explicit end marker the span runs
/// through the first character of the first marker occurrence after the
/// key; the rest of the marker is consumed by the replacement. A marker
/// that never occurs after the key makes the span run to the end of the
/// buffer, so an unterminated value consumes everything that follows.
///
/// Operator and separator detection treat the whole span as one line. A
/// key occurrence inside a commented-out line is a false match; the search
/// resumes past it until a real assignment or the end of the buffer.
///
/// Nothing to do (key absent from `search_from` onward, or an explicit
/// marker absent from the buffer entirely) returns the input unchanged.
pub fn replace_span<'a>(
    buffer: &'a str,
    key: &str,
    value: &str,
    opts: &SpanOptions<'_>,
) -> Cow<'a, str> {
    let newline = opts.newline;
    let end_marker = opts.end_marker.unwrap_or(newline);
    if key.is_empty() {
        return Cow::Borrowed(buffer);
    }
    if opts.end_marker.is_some() && !buffer.contains(end_marker) {
        debug!(marker = end_marker, "multiline end marker not found");
        return Cow::Borrowed(buffer);
    }
    // Only the marker's first character lands inside the span; byte length
    // of that character, so span boundaries stay on char boundaries.
    let marker_head = end_marker.chars().next().map_or(0, char::len_utf8);

    let mut search_from = opts.search_from;
    loop {
        let Some(start) = buffer
            .get(search_from..)
            .and_then(|tail| tail.find(key))
            .map(|pos| search_from + pos)
        else {
            debug!(key, "key not found, leaving buffer unchanged");
            return Cow::Borrowed(buffer);
        };

        // First marker occurrence strictly after the key start, if any.
        let scan_from = ceil_char_boundary(buffer, start + 1);
        let marker_at = buffer[scan_from..].find(end_marker).map(|p| scan_from + p);
        let span_end = match marker_at {
            Some(at) => at + marker_head,
            None => buffer.len(),
        };
        let line_start = buffer[..start]
            .rfind(newline)
            .map_or(0, |at| at + newline.len());
        let span = &buffer[line_start..span_end];

        if extract_key(span, true).is_none() {
            // Commented-out or otherwise bogus match; resume past it.
            // Forced forward progress keeps this loop bounded even when
            // the buffer is nothing but false matches.
            let resume = marker_at.unwrap_or(buffer.len()).max(start + 1);
            search_from = ceil_char_boundary(buffer, resume);
            continue;
        }

        let tail_start = match marker_at {
            Some(at) => (at + end_marker.len()).min(buffer.len()),
            None => buffer.len(),
        };
        let mut replacement = rewrite_line(span, value).into_owned();
        if span.ends_with(newline) {
            replacement.push_str(newline);
        }

        let mut out =
            String::with_capacity(line_start + replacement.len() + buffer.len() - tail_start);
        out.push_str(&buffer[..line_start]);
        out.push_str(&replacement);
        out.push_str(&buffer[tail_start..]);
        return Cow::Owned(out);
    }
}

/// Smallest char boundary at or after `at`, clamped to the buffer length.
fn ceil_char_boundary(s: &str, at: usize) -> usize {
    let mut at = at.min(s.len());
    while !s.is_char_boundary(at) {
        at += 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_boundary_on_multibyte() {
        let s = "æøå";
        assert_eq!(ceil_char_boundary(s, 0), 0);
        assert_eq!(ceil_char_boundary(s, 1), 2);
        assert_eq!(ceil_char_boundary(s, 99), s.len());
    }

    #[test]
    fn single_line_mode_defaults() {
        let opts = SpanOptions::new();
        assert_eq!(opts.end_marker, None);
        assert_eq!(opts.search_from, 0);
        assert_eq!(opts.newline, "\n");
    }
}
