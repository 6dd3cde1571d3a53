//! Thematic breaks (`***`, `- - -`, `___`).

use crate::token::TokenKind;

use super::rules::BlockRule;
use super::state::BlockState;
use super::utils::is_space;

/// Count the rule characters if `line` is a thematic break.
///
/// A break is 3 or more `*`, `-`, or `_` characters, optionally separated
/// by spaces or tabs.
pub(crate) fn try_parse_horizontal_rule(line: &[u8]) -> Option<(u8, usize)> {
    let rule_char = *line.first()?;
    if !matches!(rule_char, b'*' | b'-' | b'_') {
        return None;
    }

    let mut count = 0;
    for &ch in line {
        match ch {
            c if c == rule_char => count += 1,
            c if is_space(c) => continue,
            _ => return None,
        }
    }

    if count >= 3 { Some((rule_char, count)) } else { None }
}

pub(crate) struct HrRule;

impl BlockRule for HrRule {
    fn name(&self) -> &'static str {
        "hr"
    }

    fn alt(&self) -> &'static [&'static str] {
        &["paragraph", "list"]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }

        let start = state.content_start(start_line);
        let max = state.e_marks[start_line];
        if start >= max {
            return false;
        }

        let Some((rule_char, count)) = try_parse_horizontal_rule(&state.src.as_bytes()[start..max])
        else {
            return false;
        };

        if silent {
            return true;
        }

        state.line = start_line + 1;

        let token = state.push(TokenKind::Hr, "hr", 0);
        token.markup = (rule_char as char).to_string().repeat(count);
        token.map = Some((start_line, start_line + 1));

        true
    }
}
