//! Ordered and bullet lists with fancy markers.
//!
//! A list is a run of items whose markers are pairwise compatible. Each item's
//! content is parsed recursively with the block indent moved past the marker,
//! so nested lists, code and paragraphs fall out of the ordinary block rules.

use crate::config::ListOptions;
use crate::token::TokenKind;

use super::markers::{Marker, NumberingSystem, analyze, markers_compatible};
use super::rules::BlockRule;
use super::state::{BlockState, ItemScope, ParentType};
use super::utils::tab_advance;

pub(crate) struct FancyListRule {
    options: ListOptions,
}

impl FancyListRule {
    pub fn new(options: ListOptions) -> Self {
        Self { options }
    }

    fn analyze_line(&self, state: &BlockState<'_>, line: usize, previous: Option<&Marker>) -> Option<Marker> {
        analyze(
            state.src,
            state.content_start(line),
            state.e_marks[line],
            previous,
            &self.options,
        )
    }
}

impl BlockRule for FancyListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn alt(&self) -> &'static [&'static str] {
        &["paragraph"]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }

        // A line indented four or more past the enclosing list, but not far
        // enough to belong to the current item, is paragraph continuation.
        if let Some(list_indent) = state.list_indent
            && state.s_count[start_line] >= list_indent + 4
            && state.s_count[start_line] < state.blk_indent
        {
            return false;
        }

        let interrupts_paragraph = silent
            && state.parent_type == ParentType::Paragraph
            && state.t_shift[start_line] >= state.blk_indent;

        let Some(first) = self.analyze_line(state, start_line, None) else {
            return false;
        };

        if interrupts_paragraph {
            // Only a top-level list starting at 1 may interrupt prose
            if first.value != 1 && state.list_indent.is_none() {
                log::trace!("Marker {:?} cannot interrupt a paragraph", first.raw);
                return false;
            }
            // and the first item must not be empty.
            if state.skip_spaces(first.pos_after_marker) >= state.e_marks[start_line] {
                return false;
            }
        }

        if silent {
            return true;
        }

        assemble(self, state, first, start_line, end_line);
        true
    }
}

fn assemble(rule: &FancyListRule, state: &mut BlockState<'_>, first: Marker, start_line: usize, end_line: usize) {
    let parser = state.parser;
    let src = state.src;
    let markup = first.markup().to_string();
    let label_system = match first.system {
        NumberingSystem::Wildcard => NumberingSystem::Arabic,
        system => system,
    };

    log::debug!(
        "Opening {:?} list at line {} (start {})",
        first.system,
        start_line + 1,
        first.value
    );

    let list_idx = state.tokens.len();
    let (open_kind, close_kind, tag) = if first.is_ordered() {
        (TokenKind::OrderedListOpen, TokenKind::OrderedListClose, "ol")
    } else {
        (TokenKind::BulletListOpen, TokenKind::BulletListClose, "ul")
    };

    let token = state.push(open_kind, tag, 1);
    if first.is_ordered() {
        if let Some(kind) = first.system.type_attr() {
            token.attrs.push(("type".to_string(), kind.to_string()));
        }
        if first.value != 1 {
            token.attrs.push(("start".to_string(), first.value.to_string()));
        }
        if first.ordinal_indicator {
            token.attrs.push(("class".to_string(), "ordinal".to_string()));
        }
    }
    token.map = Some((start_line, 0));
    token.markup = markup.clone();

    let old_parent_type = state.parent_type;
    state.parent_type = ParentType::List;

    let mut marker = first.clone();
    let mut next_line = start_line;
    let mut line = start_line;
    let mut position = 0u64;
    let mut prev_empty_end = false;
    let mut tight = true;

    while next_line < end_line {
        let Some(next_marker) = rule.analyze_line(state, next_line, Some(&marker)) else {
            break;
        };
        if !markers_compatible(&marker, &next_marker) {
            log::debug!(
                "Marker {:?} at line {} does not continue the list",
                next_marker.raw,
                next_line + 1
            );
            break;
        }

        let marker_start = state.content_start(line);
        let max = state.e_marks[line];
        let bytes = src.as_bytes();
        let mut pos = next_marker.pos_after_marker;

        // Marker width in characters: ordinal indicators are multi-byte.
        let initial = state.s_count[line] + src[marker_start..pos].chars().count();
        let mut offset = initial;

        while pos < max {
            match bytes[pos] {
                b'\t' => offset = tab_advance(offset, state.bs_count[line]),
                b' ' => offset += 1,
                _ => break,
            }
            pos += 1;
        }

        let content_start = pos;

        // "-    \n  3": a marker alone on its line indents content by one.
        let mut indent_after_marker = if content_start >= max {
            1
        } else {
            offset - initial
        };
        // Wider gaps start indented code inside the item.
        if indent_after_marker > 4 {
            indent_after_marker = 1;
        }
        let indent = initial + indent_after_marker;

        let item_idx = state.tokens.len();
        let token = state.push(TokenKind::ListItemOpen, "li", 1);
        token.markup = markup.clone();
        token.map = Some((line, 0));
        if first.is_ordered() {
            token.info = label_system.label(first.value.saturating_add(position));
        }

        let scope = ItemScope {
            blk_indent: indent,
            t_shift: content_start - state.b_marks[line],
            s_count: offset,
        };
        let item_tight = state.with_item_scope(line, scope, |state| {
            if content_start >= max && state.is_empty(line + 1) {
                // Empty item followed by a blank line: nothing after the
                // blank line can belong to it.
                state.line = (state.line + 2).min(end_line);
            } else {
                parser.tokenize(state, line, end_line);
            }
            state.tight
        });

        if !item_tight || prev_empty_end {
            tight = false;
        }
        // An item ending in a blank line makes the list loose, unless it
        // turns out to be the last item.
        prev_empty_end = state.line - line > 1 && state.is_empty(state.line - 1);

        let token = state.push(TokenKind::ListItemClose, "li", -1);
        token.markup = markup.clone();

        next_line = state.line;
        state.tokens[item_idx].map = Some((line, next_line));
        line = next_line;

        if next_line >= end_line {
            break;
        }

        if state.s_count[next_line] < state.blk_indent {
            break;
        }

        if state.is_code_indented(next_line) {
            break;
        }

        if parser
            .rules_for("list")
            .any(|terminator| terminator.run(state, next_line, end_line, true))
        {
            break;
        }

        marker = next_marker;
        position += 1;
    }

    let token = state.push(close_kind, tag, -1);
    token.markup = markup;

    state.tokens[list_idx].map = Some((start_line, next_line));
    state.line = next_line;
    state.parent_type = old_parent_type;

    log::debug!(
        "Closed list opened at line {} ({} items, {})",
        start_line + 1,
        position + 1,
        if tight { "tight" } else { "loose" }
    );

    if tight {
        mark_tight_paragraphs(state, list_idx);
    }
}

/// Hide the paragraph wrappers that sit directly inside the items of the list
/// opened at `list_idx`.
fn mark_tight_paragraphs(state: &mut BlockState<'_>, list_idx: usize) {
    let level = state.level + 2;
    let len = state.tokens.len().saturating_sub(2);

    let mut i = list_idx + 2;
    while i < len {
        if state.tokens[i].level == level && state.tokens[i].kind == TokenKind::ParagraphOpen {
            state.tokens[i].hidden = true;
            state.tokens[i + 2].hidden = true;
            i += 2;
        }
        i += 1;
    }
}
