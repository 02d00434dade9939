//! The fixed assignment-token table and operator scanning.

/// Assignment operators recognized as key/value separators, in table order.
///
/// The table is closed; it never changes at runtime. Order matters only for
/// exact-index ties (see [`find_assignment`]).
pub const ASSIGNMENTS: [&str; 6] = ["==", "=>", "=", ":=", "::", ":"];

/// Find the assignment operator a line uses.
///
/// Every token from [`ASSIGNMENTS`] that occurs anywhere in `line` is a
/// candidate, and the one with the smallest starting byte index wins. When
/// two candidates start at the same index (prefix pairs like `::` and `:`),
/// the comparison is strict, so the earlier table entry is kept.
///
/// Returns the byte offset of the operator and the operator itself.
pub fn find_assignment(line: &str) -> Option<(usize, &'static str)> {
    let mut best: Option<(usize, &'static str)> = None;
    for token in ASSIGNMENTS {
        if let Some(pos) = line.find(token) {
            match best {
                Some((first, _)) if pos >= first => {}
                _ => best = Some((pos, token)),
            }
        }
    }
    best
}
