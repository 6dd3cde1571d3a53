use crate::block_parser::tests::helpers::{
    find_all, inline_contents, item_labels, list_opens, parse_blocks,
};
use crate::token::TokenKind;

#[test]
fn empty_document() {
    assert!(parse_blocks("").is_empty());
    assert!(parse_blocks("\n\n\n").is_empty());
}

#[test]
fn blank_lines_separate_paragraphs() {
    let tokens = parse_blocks("a\n\n\nb\n");
    let maps: Vec<_> = find_all(&tokens, TokenKind::ParagraphOpen)
        .into_iter()
        .map(|t| t.map)
        .collect();
    assert_eq!(maps, [Some((0, 1)), Some((3, 4))]);
    assert_eq!(inline_contents(&tokens), ["a", "b"]);
}

#[test]
fn whitespace_only_lines_are_blank() {
    let tokens = parse_blocks("   \n\t\nfoo\n");
    let paragraph = find_all(&tokens, TokenKind::ParagraphOpen);
    assert_eq!(paragraph.len(), 1);
    assert_eq!(paragraph[0].map, Some((2, 3)));
}

#[test]
fn several_blank_lines_between_items_keep_one_list() {
    let tokens = parse_blocks("1. a\n\n\n2. b\n");
    assert_eq!(list_opens(&tokens).len(), 1);
    assert_eq!(item_labels(&tokens), ["1", "2"]);
    assert!(
        find_all(&tokens, TokenKind::ParagraphOpen)
            .iter()
            .all(|t| !t.hidden)
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = crate::parse("a. one\nb. two\n\ntext\n", None);
    let crlf = crate::parse("a. one\r\nb. two\r\n\r\ntext\r\n", None);
    assert_eq!(lf, crlf);
}

#[test]
fn missing_final_newline() {
    let tokens = parse_blocks("i. one\nii. two");
    assert_eq!(item_labels(&tokens), ["i", "ii"]);
    assert_eq!(inline_contents(&tokens), ["one", "two"]);
}
