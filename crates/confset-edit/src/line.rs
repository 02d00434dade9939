//! Single-line rewriting: key extraction and value substitution.

use std::borrow::Cow;

use crate::token::find_assignment;

/// A line whose trimmed form starts with one of these is never modified.
const COMMENT_MARKERS: [&str; 3] = ["#", "//", "/*"];

/// Extract the key portion of an assignment line.
///
/// Returns `None` for blank lines, comment lines, and lines without any
/// recognized assignment operator; callers pass those through unchanged.
/// Otherwise returns the text before the operator, with the operator
/// appended when `include_operator` is set. Nothing is trimmed: leading
/// and trailing whitespace is preserved verbatim so the caller can
/// reconstruct the line byte-for-byte.
pub fn extract_key(line: &str, include_operator: bool) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
        return None;
    }
    let (pos, token) = find_assignment(line)?;
    if include_operator {
        Some(&line[..pos + token.len()])
    } else {
        Some(&line[..pos])
    }
}

/// Pick the separator to place between the operator and the new value.
///
/// Inspects the whole original line, not just the key fragment: an operator
/// followed by a space keeps a single space, an operator followed by a tab
/// keeps a single tab, anything else gets no separator at all. Runs of
/// whitespace collapse to one character; this matches the original author's
/// style without trying to measure it.
fn detect_separator(line: &str) -> &'static str {
    if ["= ", ": ", "> "].iter().any(|p| line.contains(p)) {
        " "
    } else if ["=\t", ":\t", ">\t"].iter().any(|p| line.contains(p)) {
        "\t"
    } else {
        ""
    }
}

/// Rewrite the value portion of an assignment line.
///
/// Comments, blank lines, and non-assignments come back borrowed and
/// untouched. For an assignment, everything before and including the
/// operator is byte-identical to the input and everything after it is
/// replaced wholesale, so values containing nested assignment-like syntax
/// (`TMPROOT=${TMPDIR:=/tmp}`) are replaced, not merged.
pub fn rewrite_line<'a>(line: &'a str, new_value: &str) -> Cow<'a, str> {
    let Some(first) = extract_key(line, true) else {
        return Cow::Borrowed(line);
    };
    let separator = detect_separator(line);
    let mut out = String::with_capacity(first.len() + separator.len() + new_value.len());
    out.push_str(first);
    out.push_str(separator);
    out.push_str(new_value);
    Cow::Owned(out)
}
