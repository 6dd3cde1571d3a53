//! Indented code blocks.
//!
//! Lines indented four or more columns past the block indent are verbatim.
//! Blank lines inside the block need no indentation.

use crate::token::TokenKind;

use super::rules::BlockRule;
use super::state::BlockState;

pub(crate) struct IndentedCodeRule;

impl BlockRule for IndentedCodeRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, _silent: bool) -> bool {
        if !state.is_code_indented(start_line) {
            return false;
        }

        let mut next_line = start_line + 1;
        let mut last = next_line;

        while next_line < end_line {
            if state.is_empty(next_line) {
                next_line += 1;
                continue;
            }

            if state.is_code_indented(next_line) {
                next_line += 1;
                last = next_line;
                continue;
            }
            break;
        }

        let mut content = state.get_lines(start_line, last, state.blk_indent + 4, false);
        content.push('\n');
        state.line = last;

        let token = state.push(TokenKind::CodeBlock, "code", 0);
        token.content = content;
        token.map = Some((start_line, last));

        true
    }
}
