use crate::config::Config;
use crate::token::Token;

mod code_blocks;
mod headings;
mod horizontal_rules;
mod indented_code;
mod lists;
pub mod marker_utils;
pub mod markers;
pub mod numerals;
mod paragraphs;
mod rules;
mod state;
mod utils;

use code_blocks::FenceRule;
use headings::HeadingRule;
use horizontal_rules::HrRule;
use indented_code::IndentedCodeRule;
use lists::FancyListRule;
use paragraphs::ParagraphRule;
use rules::{BlockRule, RuleRegistry};
use state::BlockState;

pub use utils::normalize_input;

/// Block-level parser producing a flat token stream.
///
/// The rule order is fixed: indented code, fenced code, thematic break,
/// fancy list, ATX heading, paragraph. The paragraph rule always matches, so
/// every non-blank line ends up in some block.
pub struct BlockParser<'a> {
    input: &'a str,
    rules: RuleRegistry,
    max_nesting: usize,
}

impl<'a> BlockParser<'a> {
    /// Create a parser over already-normalized input (see [`normalize_input`]).
    pub fn new(input: &'a str, config: &Config) -> Self {
        let mut rules = RuleRegistry::new();
        rules.register(Box::new(IndentedCodeRule));
        rules.register(Box::new(FenceRule));
        rules.register(Box::new(HrRule));
        rules.register(Box::new(FancyListRule::new(config.lists)));
        rules.register(Box::new(HeadingRule));
        rules.register(Box::new(ParagraphRule));

        Self {
            input,
            rules,
            max_nesting: config.max_nesting,
        }
    }

    pub fn parse(&self) -> Vec<Token> {
        log::debug!("Starting block parse ({} bytes)", self.input.len());

        let mut state = BlockState::new(self.input, self);
        let end_line = state.line_max;
        self.tokenize(&mut state, 0, end_line);

        log::debug!("Block parse produced {} tokens", state.tokens.len());
        state.tokens
    }

    /// Rules that may interrupt a block of the given kind.
    pub(crate) fn rules_for<'r>(
        &'r self,
        chain: &'r str,
    ) -> impl Iterator<Item = &'r dyn BlockRule> + 'r {
        self.rules
            .rules()
            .iter()
            .filter(move |rule| rule.alt().iter().any(|name| *name == chain))
            .map(|rule| rule.as_ref())
    }

    /// Parse lines `[start_line, end_line)` into tokens appended to `state`.
    pub(crate) fn tokenize(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize) {
        let mut line = start_line;
        let mut has_empty_lines = false;

        while line < end_line {
            line = state.skip_empty_lines(line);
            state.line = line;
            if line >= end_line {
                break;
            }

            // Outdented content belongs to an enclosing block.
            if state.s_count[line] < state.blk_indent {
                break;
            }

            if state.level >= self.max_nesting {
                log::warn!(
                    "Nesting limit {} reached at line {}, skipping remaining input",
                    self.max_nesting,
                    line + 1
                );
                state.line = end_line;
                break;
            }

            let matched = self
                .rules
                .rules()
                .iter()
                .find(|rule| rule.run(state, line, end_line, false));

            match matched {
                Some(rule) => {
                    log::trace!("Rule {} consumed lines {}..{}", rule.name(), line, state.line);
                }
                None => {
                    log::warn!("No block rule matched line {}", line + 1);
                    state.line = line + 1;
                }
            }

            state.tight = !has_empty_lines;

            // A block that swallowed a trailing blank line makes the
            // enclosing container loose.
            if state.line > 0 && state.is_empty(state.line - 1) {
                has_empty_lines = true;
            }

            line = state.line;

            if line < end_line && state.is_empty(line) {
                has_empty_lines = true;
                line += 1;
                state.line = line;
            }
        }
    }
}
