//! Error-handling policy collection.

use tracing::info;

use super::collect_fields;
use crate::config::{ErrorHandlingPolicy, QuarantineOutput};
use crate::prompt::{PromptError, Prompter};

const STRATEGY_LABEL: &str =
    "Enter Error Handling Strategy (e.g., LOG_AND_CONTINUE, STOP_ON_ERROR, QUARANTINE)";

/// Collects the error-handling strategy and, for strategies that isolate
/// failing records, the quarantine sink.
///
/// A strategy needs a quarantine sink when its label contains one of the
/// configured markers, compared case-insensitively. The default marker is
/// `QUARANTINE`.
#[derive(Debug, Clone)]
pub struct ErrorPolicyCollector {
    quarantine_markers: Vec<String>,
}

impl Default for ErrorPolicyCollector {
    fn default() -> Self {
        Self {
            quarantine_markers: vec!["QUARANTINE".to_string()],
        }
    }
}

impl ErrorPolicyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the markers that trigger quarantine collection.
    pub fn with_quarantine_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quarantine_markers = markers
            .into_iter()
            .map(|m| m.into().to_ascii_uppercase())
            .collect();
        self
    }

    pub fn needs_quarantine(&self, strategy: &str) -> bool {
        let strategy = strategy.to_ascii_uppercase();
        self.quarantine_markers
            .iter()
            .any(|marker| !marker.is_empty() && strategy.contains(marker.as_str()))
    }

    /// Prompt for the strategy, then for the quarantine sink if needed.
    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<ErrorHandlingPolicy, PromptError> {
        let strategy = prompter.input(STRATEGY_LABEL)?;
        let mut policy = ErrorHandlingPolicy::new(strategy);

        if self.needs_quarantine(&policy.strategy) {
            let fields = collect_fields(prompter, &QuarantineOutput::schema())?;
            policy.quarantine_output = Some(QuarantineOutput::from_fields(&fields));
        }

        info!(
            strategy = %policy.strategy,
            quarantine = policy.quarantine_output.is_some(),
            "error handling collected"
        );
        Ok(policy)
    }
}

/// Collect an error-handling policy with the default quarantine markers.
pub fn collect_error_policy(prompter: &mut dyn Prompter) -> Result<ErrorHandlingPolicy, PromptError> {
    ErrorPolicyCollector::default().collect(prompter)
}
