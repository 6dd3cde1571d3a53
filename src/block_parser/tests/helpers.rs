use crate::block_parser::BlockParser;
use crate::config::Config;
use crate::token::{Token, TokenKind, outline};

pub fn parse_blocks(input: &str) -> Vec<Token> {
    parse_with(input, &Config::default())
}

pub fn parse_with(input: &str, config: &Config) -> Vec<Token> {
    let _ = env_logger::builder().is_test(true).try_init();
    BlockParser::new(input, config).parse()
}

pub fn find_first(tokens: &[Token], kind: TokenKind) -> Option<&Token> {
    tokens.iter().find(|t| t.kind == kind)
}

pub fn find_all(tokens: &[Token], kind: TokenKind) -> Vec<&Token> {
    tokens.iter().filter(|t| t.kind == kind).collect()
}

/// Kinds of the top-level tokens (level 0).
pub fn top_level_kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens
        .iter()
        .filter(|t| t.level == 0)
        .map(|t| t.kind)
        .collect()
}

pub fn assert_block_kinds(input: &str, expected: &[TokenKind]) {
    let tokens = parse_blocks(input);
    let actual = top_level_kinds(&tokens);
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Open tokens of every list, ordered or bullet, in document order.
pub fn list_opens(tokens: &[Token]) -> Vec<&Token> {
    tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::OrderedListOpen | TokenKind::BulletListOpen))
        .collect()
}

/// Displayed labels of every list item, in document order.
pub fn item_labels(tokens: &[Token]) -> Vec<&str> {
    find_all(tokens, TokenKind::ListItemOpen)
        .into_iter()
        .map(|t| t.info.as_str())
        .collect()
}

pub fn inline_contents(tokens: &[Token]) -> Vec<&str> {
    find_all(tokens, TokenKind::Inline)
        .into_iter()
        .map(|t| t.content.as_str())
        .collect()
}

pub fn attrs(token: &Token) -> Vec<(&str, &str)> {
    token
        .attrs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

pub fn assert_outline(input: &str, expected: &str) {
    let tokens = parse_blocks(input);
    similar_asserts::assert_eq!(outline(&tokens), expected);
}
