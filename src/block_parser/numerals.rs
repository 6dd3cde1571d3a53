//! Numeral conversions for alphabetic and Roman list markers.

use std::sync::LazyLock;

use regex::Regex;

static ROMAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^M*(?:D?C{0,3}|C[MD])(?:L?X{0,3}|X[CL])(?:V?I{0,3}|I[XV])$")
        .expect("roman numeral pattern is valid")
});

fn roman_digit(ch: char) -> Option<u64> {
    match ch.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parse a strictly formed Roman numeral in either case.
///
/// Returns `None` for malformed numerals such as `VV` or `IIII`.
pub fn parse_roman(text: &str) -> Option<u64> {
    if text.is_empty() || !ROMAN_RE.is_match(text) {
        return None;
    }

    let digits: Vec<u64> = text.chars().map(roman_digit).collect::<Option<_>>()?;
    let mut total = 0;
    for (i, &value) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(&next) if next > value => total -= value as i64,
            _ => total += value as i64,
        }
    }
    u64::try_from(total).ok()
}

/// Value of an alphabetic marker: `a` = 1 .. `z` = 26, `aa` = 27, `zz` = 702.
///
/// Case-insensitive. Saturates instead of overflowing on absurd input.
pub fn alpha_ordinal(letters: &str) -> u64 {
    letters.bytes().fold(0u64, |acc, b| {
        let digit = u64::from(b.to_ascii_lowercase().wrapping_sub(b'a')) + 1;
        acc.saturating_mul(26).saturating_add(digit)
    })
}

/// Inverse of [`alpha_ordinal`], in lowercase. Zero has no letters.
pub fn to_alpha(mut value: u64) -> String {
    let mut letters = Vec::new();
    while value > 0 {
        value -= 1;
        letters.push(b'a' + (value % 26) as u8);
        value /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Lowercase Roman numeral for `value`. Zero has no numeral.
pub fn to_roman(mut value: u64) -> String {
    const TABLE: &[(u64, &str)] = &[
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];

    let mut out = String::new();
    for &(step, numeral) in TABLE {
        while value >= step {
            out.push_str(numeral);
            value -= step;
        }
    }
    out
}
