//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{SetupError, Stage, StageError};

/// A diagnostic wrapper for setup errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SetupDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage, error: &SetupError) -> String {
    match error {
        SetupError::RegistryLookup(_) => {
            "The integration must be registered before it can be configured".into()
        }
        SetupError::InteractionAborted(_) => {
            "Setup was cancelled; nothing was saved. Run the wizard again to start over".into()
        }
        SetupError::Schema(_) => {
            "Integrations must declare only scalar fields to be configured interactively".into()
        }
        SetupError::Store(_) if stage == Stage::Load => {
            "Check that the settings file exists and is valid YAML, JSON or TOML".into()
        }
        SetupError::Store(_) => "Check that the settings path is writable".into(),
    }
}

impl From<StageError> for SetupDiagnostic {
    fn from(e: StageError) -> Self {
        let help = help_for(e.stage, &e.error);
        SetupDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.error)),
            help: Some(help),
            severity: Severity::Error,
        }
    }
}

impl From<StageError> for miette::Report {
    fn from(e: StageError) -> Self {
        miette::Report::new(SetupDiagnostic::from(e))
    }
}
