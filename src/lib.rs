pub mod block_parser;
pub mod config;
pub mod token;

pub use block_parser::markers::{
    Delimiter, Marker, NumberingSystem, analyze_marker, markers_compatible,
};
pub use config::Config;
pub use config::ConfigBuilder;
pub use config::ListOptions;
pub use token::{Token, TokenKind, outline};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a document into a flat stream of block tokens.
///
/// Line endings are normalized first, so `\r\n` input produces the same
/// tokens as `\n` input.
///
/// # Examples
///
/// ```rust
/// use fancy_lists::{ConfigBuilder, TokenKind, parse};
///
/// let cfg = ConfigBuilder::default().allow_ordinal(true).build();
/// let tokens = parse("c. charlie\nd. delta\n", Some(cfg));
///
/// assert_eq!(tokens[0].kind, TokenKind::OrderedListOpen);
/// assert_eq!(tokens[0].attr("type"), Some("a"));
/// assert_eq!(tokens[0].attr("start"), Some("3"));
/// ```
///
/// # Arguments
///
/// * `input` - The document text
/// * `config` - Optional configuration (defaults to default config)
pub fn parse(input: &str, config: Option<Config>) -> Vec<Token> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let normalized = block_parser::normalize_input(input);
    block_parser::BlockParser::new(&normalized, &config).parse()
}

/// Parses with [`Config::default`]: ordinal and multi-letter markers disabled.
pub fn parse_with_defaults(input: &str) -> Vec<Token> {
    parse(input, None)
}
