//! Fenced code blocks (```` ``` ```` or `~~~`).

use crate::token::TokenKind;

use super::rules::BlockRule;
use super::state::BlockState;

pub(crate) struct FenceRule;

impl BlockRule for FenceRule {
    fn name(&self) -> &'static str {
        "fence"
    }

    fn alt(&self) -> &'static [&'static str] {
        &["paragraph", "list"]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }

        let src = state.src;
        let bytes = src.as_bytes();
        let mut pos = state.content_start(start_line);
        let max = state.e_marks[start_line];

        if pos + 3 > max {
            return false;
        }

        let fence_char = bytes[pos];
        if fence_char != b'~' && fence_char != b'`' {
            return false;
        }

        let fence_start = pos;
        pos = state.skip_chars(pos, fence_char);
        let fence_len = pos - fence_start;
        if fence_len < 3 {
            return false;
        }

        let markup = &src[fence_start..pos];
        let params = &src[pos..max];

        // Backtick fences cannot carry backticks in the info string.
        if fence_char == b'`' && params.contains('`') {
            return false;
        }

        if silent {
            return true;
        }

        let mut next_line = start_line;
        let mut closed = false;

        loop {
            next_line += 1;
            if next_line >= end_line {
                // Unclosed fences run to the end of the enclosing block.
                break;
            }

            let line_start = state.content_start(next_line);
            let line_max = state.e_marks[next_line];

            // Non-empty outdented line closes the enclosing list item.
            if line_start < line_max && state.s_count[next_line] < state.blk_indent {
                break;
            }

            if line_start >= bytes.len() || bytes[line_start] != fence_char {
                continue;
            }

            if state.is_code_indented(next_line) {
                continue;
            }

            let close_end = state.skip_chars(line_start, fence_char);
            if close_end - line_start < fence_len {
                continue;
            }

            if state.skip_spaces(close_end) < line_max {
                continue;
            }

            closed = true;
            break;
        }

        let content = state.get_lines(start_line + 1, next_line, state.s_count[start_line], true);
        state.line = next_line + usize::from(closed);

        let token = state.push(TokenKind::Fence, "code", 0);
        token.info = params.trim().to_string();
        token.content = content;
        token.markup = markup.to_string();
        token.map = Some((start_line, next_line + usize::from(closed)));

        true
    }
}
