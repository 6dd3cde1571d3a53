//! Paragraph parsing.
//!
//! A paragraph runs until a blank line or a line that another rule claims
//! (fenced code, thematic break, list, heading). Lines indented past the
//! block indent are lazy continuation and never interrupt.

use crate::token::TokenKind;

use super::rules::BlockRule;
use super::state::{BlockState, ParentType};

pub(crate) struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, _silent: bool) -> bool {
        let parser = state.parser;
        let old_parent_type = state.parent_type;
        state.parent_type = ParentType::Paragraph;

        let mut next_line = start_line + 1;
        while next_line < end_line && !state.is_empty(next_line) {
            if state.s_count[next_line] > state.blk_indent + 3 {
                next_line += 1;
                continue;
            }

            if parser
                .rules_for("paragraph")
                .any(|terminator| terminator.run(state, next_line, end_line, true))
            {
                break;
            }
            next_line += 1;
        }

        let content = state
            .get_lines(start_line, next_line, state.blk_indent, false)
            .trim()
            .to_string();

        state.line = next_line;

        let token = state.push(TokenKind::ParagraphOpen, "p", 1);
        token.map = Some((start_line, next_line));

        let token = state.push(TokenKind::Inline, "", 0);
        token.content = content;
        token.map = Some((start_line, next_line));

        state.push(TokenKind::ParagraphClose, "p", -1);

        state.parent_type = old_parent_type;
        true
    }
}
