//! Shared utilities for block parsing.

use std::borrow::Cow;

/// Normalize line endings to `\n` and replace NUL with U+FFFD.
///
/// Borrows the input when nothing needs to change.
pub fn normalize_input(input: &str) -> Cow<'_, str> {
    if !input.contains(['\r', '\0']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\0', "\u{FFFD}"),
    )
}

/// Space or tab. Newlines are never "space" for block purposes.
pub(crate) fn is_space(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

/// Advance `col` past one tab, honouring the line's tab adjustment.
pub(crate) fn tab_advance(col: usize, adjustment: usize) -> usize {
    col + 4 - (col + adjustment) % 4
}

/// Strip leading spaces and tabs, returning the byte count removed and the rest.
pub(crate) fn split_leading_whitespace(line: &str) -> (usize, &str) {
    let rest = line.trim_start_matches([' ', '\t']);
    (line.len() - rest.len(), rest)
}
