//! Block tokens produced by the parser.
//!
//! The stream is flat: container blocks are delimited by matching open
//! (`nesting == 1`) and close (`nesting == -1`) tokens, and `level` records the
//! depth at which each token sits.

use std::fmt::Write;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    OrderedListOpen,
    OrderedListClose,
    BulletListOpen,
    BulletListClose,
    ListItemOpen,
    ListItemClose,
    ParagraphOpen,
    ParagraphClose,
    HeadingOpen,
    HeadingClose,
    Inline,
    CodeBlock,
    Fence,
    Hr,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::OrderedListOpen => "ordered_list_open",
            TokenKind::OrderedListClose => "ordered_list_close",
            TokenKind::BulletListOpen => "bullet_list_open",
            TokenKind::BulletListClose => "bullet_list_close",
            TokenKind::ListItemOpen => "list_item_open",
            TokenKind::ListItemClose => "list_item_close",
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::ParagraphClose => "paragraph_close",
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::Inline => "inline",
            TokenKind::CodeBlock => "code_block",
            TokenKind::Fence => "fence",
            TokenKind::Hr => "hr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// HTML-ish tag name (`ol`, `li`, `p`, ...), kept for renderers.
    pub tag: &'static str,
    /// 1 opens a block, -1 closes it, 0 is self-contained.
    pub nesting: i8,
    pub level: usize,
    pub attrs: Vec<(String, String)>,
    /// Source line range `[begin, end)`.
    pub map: Option<(usize, usize)>,
    pub markup: String,
    /// Fence info string, or the displayed label of an ordered list item.
    pub info: String,
    pub content: String,
    /// Hidden tokens are not rendered (paragraph wrappers in tight lists).
    pub hidden: bool,
}

impl Token {
    pub fn new(kind: TokenKind, tag: &'static str, nesting: i8) -> Self {
        Self {
            kind,
            tag,
            nesting,
            level: 0,
            attrs: Vec::new(),
            map: None,
            markup: String::new(),
            info: String::new(),
            content: String::new(),
            hidden: false,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Render tokens as an indented outline, one token per line.
///
/// ```text
/// ordered_list_open type="a" start="3"
///   list_item_open [c]
///     paragraph_open hidden
///       inline "charlie"
/// ```
pub fn outline(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = write!(out, "{}{}", "  ".repeat(token.level), token.kind.as_str());
        if token.kind == TokenKind::ListItemOpen && !token.info.is_empty() {
            let _ = write!(out, " [{}]", token.info);
        }
        for (key, value) in &token.attrs {
            let _ = write!(out, " {key}=\"{value}\"");
        }
        if token.hidden {
            out.push_str(" hidden");
        }
        if matches!(
            token.kind,
            TokenKind::Inline | TokenKind::CodeBlock | TokenKind::Fence
        ) {
            let _ = write!(out, " {:?}", token.content);
        }
        out.push('\n');
    }
    out
}
