//! ATX headings (`# Title`).

use crate::token::TokenKind;

use super::rules::BlockRule;
use super::state::BlockState;
use super::utils::is_space;

const TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub(crate) struct HeadingRule;

impl BlockRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn alt(&self) -> &'static [&'static str] {
        &["paragraph"]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }

        let bytes = state.src.as_bytes();
        let mut pos = state.content_start(start_line);
        let mut max = state.e_marks[start_line];

        if pos >= max || bytes[pos] != b'#' {
            return false;
        }

        let mut level = 0;
        while pos < max && bytes[pos] == b'#' && level <= 6 {
            level += 1;
            pos += 1;
        }

        if level > 6 || (pos < max && !is_space(bytes[pos])) {
            return false;
        }

        if silent {
            return true;
        }

        // Drop trailing spaces and a closing `###` run preceded by a space.
        max = state.skip_spaces_back(max, pos);
        let closing = state.skip_chars_back(max, b'#', pos);
        if closing > pos && is_space(bytes[closing - 1]) {
            max = closing;
        }

        let content = state.src[pos..max].trim().to_string();
        let tag = TAGS[level - 1];
        let markup = "#".repeat(level);

        state.line = start_line + 1;

        let token = state.push(TokenKind::HeadingOpen, tag, 1);
        token.markup = markup.clone();
        token.map = Some((start_line, start_line + 1));

        let token = state.push(TokenKind::Inline, "", 0);
        token.content = content;
        token.map = Some((start_line, start_line + 1));

        let token = state.push(TokenKind::HeadingClose, tag, -1);
        token.markup = markup;

        true
    }
}
