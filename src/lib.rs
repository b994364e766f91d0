//! # pipeconf
//!
//! Interactive, registry-driven configuration assembly for data pipelines.
//!
//! ## Overview
//!
//! pipeconf provides:
//! - **Open integration registry**: Sources and destinations declare their own
//!   configuration fields through the `Integration` trait
//! - **Schema-driven prompts**: Every declared field is asked for without any
//!   per-integration prompting code
//! - **Rule and policy capture**: Validation/transformation rule text and an
//!   error-handling strategy with an optional quarantine sink
//! - **One canonical document**: `ConfigurationDocument`, persisted to and
//!   reloaded from a YAML (or JSON/TOML) settings store
//! - **Pluggable prompt channels**: Terminal menus, plain line prompts, or a
//!   scripted prompter for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pipeconf::{LinePrompter, SettingsStore, SetupWizard, default_registry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wizard = SetupWizard::new(default_registry())
//!         .with_store(SettingsStore::at_path("config.yaml")?);
//!
//!     let outcome = wizard.run(&mut LinePrompter::stdio())?;
//!     println!("input: {}", outcome.document.input_method);
//!
//!     let reloaded = pipeconf::load("config.yaml")?;
//!     assert_eq!(reloaded.input_method, outcome.document.input_method);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `terminal` - Arrow-key menus via dialoguer (enabled by default)
//! - `json` - JSON settings files
//! - `toml` - TOML settings files
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - Argument types for sarge-based front-ends
//! - `cli` - The `pipeconf` binary
//!
//! ## Collection and reload semantics
//!
//! - Integrations are selected from sorted name lists. A name that is not
//!   registered fails with `SetupError::RegistryLookup` before any of that
//!   integration's fields are asked for.
//! - Each field answer is stored as text (`ConfigValue::Scalar`); type labels
//!   are presentational only.
//! - Rule sets end at the first empty line; each rule is stored followed by
//!   a newline, so `["a>0", "b<10", ""]` yields `"a>0\nb<10\n"`.
//! - Loading a store normalizes every scalar to text and every mapping to
//!   `ConfigValue::Record`. `ConfigurationDocument::conform_to_registry`
//!   compares the reloaded fields with the schemas the registry reports now.

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod prompt;
pub mod registry;
pub mod store;
pub mod wizard;

// Re-exports for convenience
pub use config::{
    ConfigMap, ConfigValue, ConfigurationDocument, ErrorHandlingPolicy, QuarantineOutput,
    RuleSet, assemble,
};
pub use error::{SetupError, Stage, StageError};
pub use format::{FormatError, FormatKind};
pub use io::{FileBackend, InMemoryBackend, StoreBackend};
#[cfg(feature = "terminal")]
pub use prompt::TerminalPrompter;
pub use prompt::{LinePrompter, PromptError, Prompter, ScriptedPrompter};
pub use registry::{
    CustomIntegration, FieldKind, FieldSchema, FieldSpec, Integration, IntegrationRegistry,
    RegistryAdapter, RegistryError, Role, SchemaError, default_registry,
};
pub use store::{SettingsStore, StoreError, load, persist};
pub use wizard::{SetupOutcome, SetupWizard};

/// Run the wizard against the bundled registry and save the result to
/// `path`, using the terminal prompter.
#[cfg(feature = "terminal")]
pub fn setup_interactively(
    path: impl AsRef<std::path::Path>,
) -> Result<SetupOutcome, StageError> {
    let path = path.as_ref();
    let store = SettingsStore::at_path(path)
        .map_err(|e| StageError::new(Stage::Persist, path.to_string_lossy(), e))?;
    SetupWizard::new(default_registry())
        .with_store(store)
        .run(&mut TerminalPrompter::new())
}

/// Load a settings file and check it against `registry`, logging any
/// fields that no longer match the integration schemas.
pub fn load_and_reconcile(
    path: impl AsRef<std::path::Path>,
    registry: &dyn RegistryAdapter,
) -> Result<(ConfigurationDocument, config::ReconcileReport), StageError> {
    let path = path.as_ref();
    let doc = load(path).map_err(|e| StageError::new(Stage::Load, path.to_string_lossy(), e))?;
    let report = doc.conform_to_registry(registry);
    Ok((doc, report))
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
