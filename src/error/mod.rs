//! Error types for the setup wizard.
//!
//! This module provides:
//! - `Stage`: Indicates which wizard step an error occurred in
//! - `SetupError`: The error taxonomy (registry, interaction, schema, store)
//! - `StageError`: A `SetupError` with the stage and target it happened at

use std::fmt;

use thiserror::Error;

use crate::prompt::PromptError;
use crate::registry::{RegistryError, SchemaError};
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Choosing between server and CLI mode
    SelectMode,
    SelectInput,
    InputFields,
    SelectOutput,
    OutputFields,
    Validations,
    Transformations,
    ErrorHandling,
    /// Writing the document to the settings store
    Persist,
    /// Reading the document from the settings store
    Load,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::SelectMode => write!(f, "SelectMode"),
            Stage::SelectInput => write!(f, "SelectInput"),
            Stage::InputFields => write!(f, "InputFields"),
            Stage::SelectOutput => write!(f, "SelectOutput"),
            Stage::OutputFields => write!(f, "OutputFields"),
            Stage::Validations => write!(f, "Validations"),
            Stage::Transformations => write!(f, "Transformations"),
            Stage::ErrorHandling => write!(f, "ErrorHandling"),
            Stage::Persist => write!(f, "Persist"),
            Stage::Load => write!(f, "Load"),
        }
    }
}

/// Everything that can end a setup session.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A named integration is not registered
    #[error(transparent)]
    RegistryLookup(#[from] RegistryError),

    /// The human cancelled or the prompt channel failed
    #[error(transparent)]
    InteractionAborted(#[from] PromptError),

    /// An integration cannot be collected field by field
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The settings store could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub struct StageError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// What was being worked on (integration name, rule category, store id)
    pub target: String,
    /// The underlying error
    pub error: SetupError,
}

impl StageError {
    pub fn new(stage: Stage, target: impl Into<String>, error: impl Into<SetupError>) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.error, SetupError::InteractionAborted(_))
    }

    pub fn is_registry_lookup(&self) -> bool {
        matches!(self.error, SetupError::RegistryLookup(_))
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Attach a stage and target to a fallible step.
pub(crate) trait StageContext<T> {
    fn at(self, stage: Stage, target: &str) -> Result<T, StageError>;
}

impl<T, E: Into<SetupError>> StageContext<T> for Result<T, E> {
    fn at(self, stage: Stage, target: &str) -> Result<T, StageError> {
        self.map_err(|e| StageError::new(stage, target, e))
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
