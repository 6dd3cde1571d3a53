//! Lexers for list markers at the start of a line's content.
//!
//! Both lexers take the whole source buffer plus the marker start and the
//! line end, and report the byte offset right after the marker.

use std::sync::LazyLock;

use regex::Regex;

use super::utils::is_space;

/// Ordered markers are recognized within this many characters.
const MARKER_WINDOW: usize = 10;

// Ordinal indicators: º ° ˚ ᵒ
static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,9}|[a-z]{1,3}|[A-Z]{1,3}|[ivxlcdm]+|[IVXLCDM]+|#)([\x{BA}\x{B0}\x{2DA}\x{1D52}]?)([.)])",
    )
    .expect("ordered marker pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletToken {
    pub symbol: u8,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedToken<'s> {
    /// Digits, letters or `#`.
    pub numeral: &'s str,
    pub ordinal_indicator: bool,
    /// `b'.'` or `b')'`.
    pub delimiter: u8,
    pub end: usize,
}

/// Match `*`, `-` or `+` followed by a space, a tab or the end of the line.
pub fn lex_bullet(src: &str, start: usize, max: usize) -> Option<BulletToken> {
    let bytes = src.as_bytes();
    if start >= max {
        return None;
    }

    let symbol = bytes[start];
    if !matches!(symbol, b'*' | b'-' | b'+') {
        return None;
    }

    let end = start + 1;
    if end < max && !is_space(bytes[end]) {
        // "-test" is not a list item
        return None;
    }

    Some(BulletToken { symbol, end })
}

/// Match a numeral (digits, letters, Roman letters or `#`), an optional
/// ordinal indicator and a `.` or `)` delimiter.
///
/// A single uppercase letter followed directly by `.` needs two spaces
/// after it (`B. Russell` is prose); the first space becomes part of the
/// marker.
pub fn lex_ordered(src: &str, start: usize, max: usize) -> Option<OrderedToken<'_>> {
    if start + 1 >= max {
        return None;
    }

    let line = &src[start..max];
    let window_end = line
        .char_indices()
        .nth(MARKER_WINDOW)
        .map_or(line.len(), |(idx, _)| idx);

    let caps = ORDERED_MARKER_RE.captures(&line[..window_end])?;
    let numeral = caps.get(1)?.as_str();
    let ordinal_indicator = caps.get(2).is_some_and(|m| !m.is_empty());
    let delimiter = caps.get(3)?.as_str().as_bytes()[0];

    let bytes = src.as_bytes();
    let mut end = start + caps.get(0)?.end();
    if end < max && !is_space(bytes[end]) {
        return None;
    }

    let single_upper = numeral.len() == 1 && numeral.as_bytes()[0].is_ascii_uppercase();
    if single_upper && !ordinal_indicator && delimiter == b'.' {
        end += 1;
        if end >= max || !is_space(bytes[end]) {
            return None;
        }
    }

    Some(OrderedToken {
        numeral,
        ordinal_indicator,
        delimiter,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered(line: &str) -> Option<OrderedToken<'_>> {
        lex_ordered(line, 0, line.len())
    }

    #[test]
    fn bullets_need_trailing_space() {
        assert_eq!(
            lex_bullet("- item", 0, 6),
            Some(BulletToken { symbol: b'-', end: 1 })
        );
        assert_eq!(lex_bullet("+", 0, 1), Some(BulletToken { symbol: b'+', end: 1 }));
        assert_eq!(lex_bullet("-test", 0, 5), None);
        assert_eq!(lex_bullet("1. x", 0, 4), None);
        assert_eq!(lex_bullet("", 0, 0), None);
    }

    #[test]
    fn lexes_numeral_kinds() {
        let tok = ordered("12) twelve").unwrap();
        assert_eq!((tok.numeral, tok.delimiter, tok.end), ("12", b')', 3));

        assert_eq!(ordered("c. charlie").unwrap().numeral, "c");
        assert_eq!(ordered("xiv. fourteen").unwrap().numeral, "xiv");
        assert_eq!(ordered("viii. eight").unwrap().numeral, "viii");
        assert_eq!(ordered("#. next").unwrap().numeral, "#");
        assert_eq!(ordered("3.").unwrap().end, 2);
    }

    #[test]
    fn rejects_non_markers() {
        assert_eq!(ordered("1"), None);
        assert_eq!(ordered("1.x"), None);
        assert_eq!(ordered("1234567890. ten digits"), None);
        assert_eq!(ordered("abcd. four letters"), None);
        assert_eq!(ordered("aB. mixed"), None);
        assert_eq!(ordered("- bullet"), None);
    }

    #[test]
    fn ordinal_indicator_is_recorded() {
        let tok = ordered("1º. first").unwrap();
        assert!(tok.ordinal_indicator);
        assert_eq!(tok.numeral, "1");
        assert_eq!(tok.end, "1º.".len());

        assert!(!ordered("1. first").unwrap().ordinal_indicator);
    }

    #[test]
    fn uppercase_period_needs_two_spaces() {
        assert_eq!(ordered("B. Russell"), None);
        assert_eq!(ordered("B.  foo").unwrap().end, 3);
        assert_eq!(ordered("B."), None);
        assert_eq!(ordered("B) foo").unwrap().end, 2);
        assert_eq!(ordered("BC. foo").unwrap().end, 3);
    }

    #[test]
    fn window_limits_roman_length() {
        assert!(ordered("xxxviii. thirty-eight").is_some());
        assert_eq!(ordered("mmmdccclxxxviii. too long"), None);
    }

    #[test]
    fn honours_start_offset() {
        let src = "text\n  a) alpha\n";
        let tok = lex_ordered(src, 7, 15).unwrap();
        assert_eq!((tok.numeral, tok.end), ("a", 9));
    }
}
