//! Rule-set collection.

use std::fmt;

use tracing::debug;

use crate::config::RuleSet;
use crate::prompt::{PromptError, Prompter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Validations,
    Transformations,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCategory::Validations => write!(f, "validations"),
            RuleCategory::Transformations => write!(f, "transformations"),
        }
    }
}

/// Read rule lines until an empty line.
///
/// Each line before the empty one is kept, followed by `\n`. A failed read
/// discards everything collected so far.
pub fn collect_rules(
    prompter: &mut dyn Prompter,
    category: RuleCategory,
) -> Result<RuleSet, PromptError> {
    let label = format!("Enter {category} rules (multiline, finish with empty line)");
    let mut rules = RuleSet::new();
    loop {
        let line = prompter.input(&label)?;
        if line.is_empty() {
            break;
        }
        rules.push(&line);
    }
    debug!(%category, count = rules.rules().count(), "rules collected");
    Ok(rules)
}
