use super::state::BlockState;

/// A block rule tries to recognize a block starting at `start_line`.
///
/// In silent mode the rule only reports whether it would match, without
/// pushing tokens or moving the cursor. This is how other rules ask
/// "does this line interrupt me?".
pub(crate) trait BlockRule {
    fn name(&self) -> &'static str;

    /// Names of the blocks this rule may terminate.
    fn alt(&self) -> &'static [&'static str] {
        &[]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool) -> bool;
}

pub(crate) struct RuleRegistry {
    rules: Vec<Box<dyn BlockRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn BlockRule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn BlockRule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
