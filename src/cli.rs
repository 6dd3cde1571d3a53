use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fancy-lists")]
#[command(author, version)]
#[command(about = "Inspect how fancy ordered-list markers are parsed")]
#[command(
    long_about = "fancy-lists parses Markdown-like documents whose ordered lists may be \
    numbered with letters (a. b. c.), Roman numerals (i. ii. iii.), the # wildcard, or \
    numerals with an ordinal indicator (1º. 2º.). It prints the resulting block tokens or \
    the classification of each marker line."
)]
#[command(after_help = "\
EXAMPLES:

    # Show the token outline of a file
    fancy-lists parse notes.md

    # Parse from stdin as JSON
    printf 'i. one\\nii. two\\n' | fancy-lists parse --format json

    # Classify every marker line
    fancy-lists markers --allow-multi-letter notes.md

CONFIGURATION:

fancy-lists looks for configuration files in this order:
  1. Explicit --config path
  2. .fancy-lists.toml or fancy-lists.toml in current/parent directories
  3. ~/.config/fancy-lists/config.toml (XDG)
  4. Built-in defaults

Example .fancy-lists.toml:

    max_nesting = 100

    [lists]
    allow_ordinal = true
    allow_multi_letter = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, fancy-lists will \
        search for .fancy-lists.toml or fancy-lists.toml in the input's directory and its \
        parents, then fall back to ~/.config/fancy-lists/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone, Copy, Default)]
pub struct MarkerFlags {
    /// Accept ordinal indicators such as `1º.`
    #[arg(long)]
    pub allow_ordinal: bool,

    /// Accept two and three letter markers such as `aa.`
    #[arg(long)]
    pub allow_multi_letter: bool,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One token per line, indented by nesting level
    #[default]
    Outline,
    /// The token stream as a JSON array
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a document and print its block tokens
    #[command(
        long_about = "Parse a document and print the block token stream. List tokens carry \
        the `type`, `start` and `class` attributes and each ordered item shows its displayed \
        label. Paragraphs inside tight lists are marked hidden."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Outline of a file
    fancy-lists parse document.md

    # JSON from stdin
    echo 'a) alpha' | fancy-lists parse --format json")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Outline)]
        format: OutputFormat,

        #[command(flatten)]
        markers: MarkerFlags,
    },
    /// Classify the list marker on each line
    #[command(
        long_about = "Classify the list marker at the start of each line, threading the \
        previous marker as context the way consecutive list items are read. A line whose \
        marker does not continue the previous one starts a new context."
    )]
    Markers {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        #[command(flatten)]
        markers: MarkerFlags,
    },
}
