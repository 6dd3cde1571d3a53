//! Classification of list markers and the list compatibility test.

use serde::Serialize;

use crate::config::ListOptions;

use super::marker_utils::{lex_bullet, lex_ordered};
use super::numerals::{alpha_ordinal, parse_roman, to_alpha, to_roman};
use super::utils::split_leading_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingSystem {
    Arabic,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
    /// `#`: continues whatever the list is using.
    Wildcard,
    BulletStar,
    BulletDash,
    BulletPlus,
}

impl NumberingSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberingSystem::Arabic => "arabic",
            NumberingSystem::LowerAlpha => "lower_alpha",
            NumberingSystem::UpperAlpha => "upper_alpha",
            NumberingSystem::LowerRoman => "lower_roman",
            NumberingSystem::UpperRoman => "upper_roman",
            NumberingSystem::Wildcard => "wildcard",
            NumberingSystem::BulletStar => "bullet_star",
            NumberingSystem::BulletDash => "bullet_dash",
            NumberingSystem::BulletPlus => "bullet_plus",
        }
    }

    pub fn is_ordered(self) -> bool {
        !matches!(
            self,
            NumberingSystem::BulletStar | NumberingSystem::BulletDash | NumberingSystem::BulletPlus
        )
    }

    pub fn is_roman(self) -> bool {
        matches!(self, NumberingSystem::LowerRoman | NumberingSystem::UpperRoman)
    }

    pub fn is_alpha(self) -> bool {
        matches!(self, NumberingSystem::LowerAlpha | NumberingSystem::UpperAlpha)
    }

    /// Value of the `type` attribute on the list, if any.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            NumberingSystem::LowerAlpha => Some("a"),
            NumberingSystem::UpperAlpha => Some("A"),
            NumberingSystem::LowerRoman => Some("i"),
            NumberingSystem::UpperRoman => Some("I"),
            _ => None,
        }
    }

    /// Render `value` the way an item numbered in this system displays it.
    /// Bullets have no label; wildcard lists count in Arabic numerals.
    pub fn label(self, value: u64) -> String {
        match self {
            NumberingSystem::Arabic | NumberingSystem::Wildcard => value.to_string(),
            NumberingSystem::LowerAlpha => to_alpha(value),
            NumberingSystem::UpperAlpha => to_alpha(value).to_ascii_uppercase(),
            NumberingSystem::LowerRoman => to_roman(value),
            NumberingSystem::UpperRoman => to_roman(value).to_ascii_uppercase(),
            NumberingSystem::BulletStar
            | NumberingSystem::BulletDash
            | NumberingSystem::BulletPlus => String::new(),
        }
    }

    fn from_bullet(symbol: u8) -> Self {
        match symbol {
            b'*' => NumberingSystem::BulletStar,
            b'+' => NumberingSystem::BulletPlus,
            _ => NumberingSystem::BulletDash,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Delimiter {
    #[serde(rename = ".")]
    Period,
    #[serde(rename = ")")]
    Paren,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Period => '.',
            Delimiter::Paren => ')',
        }
    }
}

/// A fully classified list marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub system: NumberingSystem,
    /// Position this marker claims in its list (`c.` is 3, `iv)` is 4).
    pub value: u64,
    pub ordinal_indicator: bool,
    /// `None` for bullets.
    pub delimiter: Option<Delimiter>,
    /// Literal digits, letters or symbol consumed.
    pub raw: String,
    /// Byte offset right after the marker (including the extra space an
    /// uppercase letter with a period consumes).
    pub pos_after_marker: usize,
}

impl Marker {
    pub fn is_ordered(&self) -> bool {
        self.system.is_ordered()
    }

    /// Character recorded as `markup` on list tokens.
    pub fn markup(&self) -> char {
        match self.delimiter {
            Some(delimiter) => delimiter.as_char(),
            None => match self.system {
                NumberingSystem::BulletStar => '*',
                NumberingSystem::BulletPlus => '+',
                _ => '-',
            },
        }
    }
}

/// Classify the marker starting at byte `start` of `src`, with `max` the end
/// of the line. `previous` is the last marker accepted into the current list
/// and steers the letter-vs-Roman choice.
pub(crate) fn analyze(
    src: &str,
    start: usize,
    max: usize,
    previous: Option<&Marker>,
    options: &ListOptions,
) -> Option<Marker> {
    if let Some(token) = lex_ordered(src, start, max) {
        if token.ordinal_indicator && !options.allow_ordinal {
            log::trace!("Rejecting ordinal marker {:?}: ordinals disabled", token.numeral);
            return None;
        }

        let numeral = token.numeral;
        let first = numeral.as_bytes()[0];
        let (system, value) = if first.is_ascii_digit() {
            (NumberingSystem::Arabic, numeral.parse::<u64>().ok()?)
        } else if first.is_ascii_alphabetic() {
            classify_letters(numeral, previous, options)?
        } else {
            (NumberingSystem::Wildcard, 1)
        };

        let delimiter = if token.delimiter == b'.' {
            Delimiter::Period
        } else {
            Delimiter::Paren
        };

        return Some(Marker {
            system,
            value,
            ordinal_indicator: token.ordinal_indicator,
            delimiter: Some(delimiter),
            raw: numeral.to_string(),
            pos_after_marker: token.end,
        });
    }

    let bullet = lex_bullet(src, start, max)?;
    Some(Marker {
        system: NumberingSystem::from_bullet(bullet.symbol),
        value: 1,
        ordinal_indicator: false,
        delimiter: None,
        raw: (bullet.symbol as char).to_string(),
        pos_after_marker: bullet.end,
    })
}

/// Decide between the alphabetic and Roman reading of a letter numeral.
///
/// Roman wins when the previous marker was Roman, or when there is no
/// alphabetic context and the token is `i`/`I` or longer than one letter.
/// Multi-letter alphabetic markers need `allow_multi_letter`.
fn classify_letters(
    letters: &str,
    previous: Option<&Marker>,
    options: &ListOptions,
) -> Option<(NumberingSystem, u64)> {
    let lower = letters.as_bytes()[0].is_ascii_lowercase();
    let alpha_valid = letters.len() == 1 || options.allow_multi_letter;

    let prev_roman = previous.is_some_and(|m| m.system.is_roman());
    let prev_alpha = previous.is_some_and(|m| m.system.is_alpha());
    let prefer_roman =
        prev_roman || (!prev_alpha && (letters.eq_ignore_ascii_case("i") || letters.len() > 1));

    if let Some(value) = parse_roman(letters)
        && (!alpha_valid || prefer_roman)
    {
        let system = if lower {
            NumberingSystem::LowerRoman
        } else {
            NumberingSystem::UpperRoman
        };
        return Some((system, value));
    }

    if alpha_valid {
        let system = if lower {
            NumberingSystem::LowerAlpha
        } else {
            NumberingSystem::UpperAlpha
        };
        return Some((system, alpha_ordinal(letters)));
    }

    log::trace!("Rejecting marker {letters:?}: not Roman and multi-letter markers disabled");
    None
}

/// Whether `next` continues the list that `previous` belongs to.
pub fn markers_compatible(previous: &Marker, next: &Marker) -> bool {
    previous.is_ordered() == next.is_ordered()
        && (previous.system == next.system || next.system == NumberingSystem::Wildcard)
        && previous.delimiter == next.delimiter
        && previous.ordinal_indicator == next.ordinal_indicator
}

/// Classify the marker at the start of a single line.
///
/// Leading spaces and tabs are skipped; a trailing newline is ignored.
/// Offsets in the result are relative to `line`.
pub fn analyze_marker(line: &str, previous: Option<&Marker>, options: &ListOptions) -> Option<Marker> {
    let max = line.strip_suffix('\n').unwrap_or(line).len();
    let (indent, _) = split_leading_whitespace(&line[..max]);
    analyze(line, indent, max, previous, options)
}
