//! Line tables and mutable cursor shared by all block rules.

use crate::token::{Token, TokenKind};

use super::BlockParser;
use super::utils::{is_space, tab_advance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParentType {
    Root,
    List,
    Paragraph,
}

/// Values a list item installs on the host while its content is parsed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemScope {
    pub blk_indent: usize,
    pub t_shift: usize,
    pub s_count: usize,
}

pub(crate) struct BlockState<'a> {
    pub src: &'a str,
    pub parser: &'a BlockParser<'a>,
    /// Byte offset where each line begins.
    pub b_marks: Vec<usize>,
    /// Byte offset of each line's `\n` (or the end of input).
    pub e_marks: Vec<usize>,
    /// Bytes of leading whitespace (tabs not expanded).
    pub t_shift: Vec<usize>,
    /// Width of leading whitespace (tabs expanded to multiples of 4).
    pub s_count: Vec<usize>,
    /// Column adjustment applied when expanding tabs on a line.
    pub bs_count: Vec<usize>,
    /// Indent required for content of the block currently being parsed.
    pub blk_indent: usize,
    /// Indent of the enclosing list, if any.
    pub list_indent: Option<usize>,
    pub line: usize,
    pub line_max: usize,
    pub tight: bool,
    pub parent_type: ParentType,
    pub level: usize,
    pub tokens: Vec<Token>,
}

impl<'a> BlockState<'a> {
    pub(crate) fn new(src: &'a str, parser: &'a BlockParser<'a>) -> Self {
        let mut b_marks = Vec::new();
        let mut e_marks = Vec::new();
        let mut t_shift = Vec::new();
        let mut s_count = Vec::new();
        let mut bs_count = Vec::new();

        let bytes = src.as_bytes();
        let len = bytes.len();
        let mut start = 0;
        let mut indent = 0;
        let mut offset = 0;
        let mut indent_found = false;
        let mut pos = 0;

        while pos < len {
            let ch = bytes[pos];

            if !indent_found {
                if is_space(ch) {
                    indent += 1;
                    if ch == b'\t' {
                        offset = tab_advance(offset, 0);
                    } else {
                        offset += 1;
                    }
                    pos += 1;
                    continue;
                }
                indent_found = true;
            }

            if ch == b'\n' || pos == len - 1 {
                if ch != b'\n' {
                    pos += 1;
                }
                b_marks.push(start);
                e_marks.push(pos);
                t_shift.push(indent);
                s_count.push(offset);
                bs_count.push(0);

                indent_found = false;
                indent = 0;
                offset = 0;
                start = pos + 1;
            }
            pos += 1;
        }

        // Sentinel entry so `line + 1` lookups stay in bounds.
        b_marks.push(len);
        e_marks.push(len);
        t_shift.push(0);
        s_count.push(0);
        bs_count.push(0);

        let line_max = b_marks.len() - 1;

        Self {
            src,
            parser,
            b_marks,
            e_marks,
            t_shift,
            s_count,
            bs_count,
            blk_indent: 0,
            list_indent: None,
            line: 0,
            line_max,
            tight: false,
            parent_type: ParentType::Root,
            level: 0,
            tokens: Vec::new(),
        }
    }

    /// Push a token, adjusting the nesting level, and return it for decoration.
    pub(crate) fn push(&mut self, kind: TokenKind, tag: &'static str, nesting: i8) -> &mut Token {
        let mut token = Token::new(kind, tag, nesting);
        if nesting < 0 {
            self.level = self.level.saturating_sub(1);
        }
        token.level = self.level;
        if nesting > 0 {
            self.level += 1;
        }
        self.tokens.push(token);
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    /// Byte offset of the first non-whitespace character on `line`.
    pub(crate) fn content_start(&self, line: usize) -> usize {
        self.b_marks[line] + self.t_shift[line]
    }

    pub(crate) fn is_empty(&self, line: usize) -> bool {
        self.content_start(line) >= self.e_marks[line]
    }

    /// True when `line` is indented four or more columns past the block indent.
    pub(crate) fn is_code_indented(&self, line: usize) -> bool {
        self.s_count[line] >= self.blk_indent + 4
    }

    pub(crate) fn skip_empty_lines(&self, mut from: usize) -> usize {
        while from < self.line_max {
            if !self.is_empty(from) {
                break;
            }
            from += 1;
        }
        from
    }

    pub(crate) fn skip_spaces(&self, mut pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && is_space(bytes[pos]) {
            pos += 1;
        }
        pos
    }

    pub(crate) fn skip_chars(&self, mut pos: usize, ch: u8) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && bytes[pos] == ch {
            pos += 1;
        }
        pos
    }

    /// Walk back over spaces from `pos`, never going below `min`.
    pub(crate) fn skip_spaces_back(&self, mut pos: usize, min: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos > min {
            if !is_space(bytes[pos - 1]) {
                break;
            }
            pos -= 1;
        }
        pos
    }

    pub(crate) fn skip_chars_back(&self, mut pos: usize, ch: u8, min: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos > min {
            if bytes[pos - 1] != ch {
                break;
            }
            pos -= 1;
        }
        pos
    }

    /// Collect lines `[begin, end)` with up to `indent` columns of leading
    /// whitespace removed. Bytes masked by an overridden `t_shift` (list
    /// markers) count as indentation.
    pub(crate) fn get_lines(&self, begin: usize, end: usize, indent: usize, keep_last_lf: bool) -> String {
        if begin >= end {
            return String::new();
        }

        let bytes = self.src.as_bytes();
        let mut out = String::new();

        for line in begin..end {
            let line_start = self.b_marks[line];
            let mut first = line_start;
            let last = if line + 1 < end || keep_last_lf {
                (self.e_marks[line] + 1).min(bytes.len())
            } else {
                self.e_marks[line]
            };
            let mut line_indent = 0;

            while first < last && line_indent < indent {
                let ch = bytes[first];
                if is_space(ch) {
                    if ch == b'\t' {
                        line_indent = tab_advance(line_indent, self.bs_count[line]);
                    } else {
                        line_indent += 1;
                    }
                    first += 1;
                } else if first - line_start < self.t_shift[line] {
                    // Masked marker characters count one column each.
                    line_indent += 1;
                    first += self.src[first..].chars().next().map_or(1, char::len_utf8);
                } else {
                    break;
                }
            }

            if line_indent > indent {
                // A tab straddled the indent boundary; keep the excess as spaces.
                out.push_str(&" ".repeat(line_indent - indent));
            }
            out.push_str(&self.src[first..last]);
        }

        out
    }

    /// Install `scope` for the duration of `f`, then restore the previous
    /// block indent, list indent, tight flag and the first line's offsets.
    pub(crate) fn with_item_scope<R>(
        &mut self,
        line: usize,
        scope: ItemScope,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let old_tight = self.tight;
        let old_t_shift = self.t_shift[line];
        let old_s_count = self.s_count[line];
        let old_list_indent = self.list_indent;
        let old_blk_indent = self.blk_indent;

        self.list_indent = Some(old_blk_indent);
        self.blk_indent = scope.blk_indent;
        self.tight = true;
        self.t_shift[line] = scope.t_shift;
        self.s_count[line] = scope.s_count;

        let result = f(self);

        self.blk_indent = old_blk_indent;
        self.list_indent = old_list_indent;
        self.t_shift[line] = old_t_shift;
        self.s_count[line] = old_s_count;
        self.tight = old_tight;

        result
    }
}
