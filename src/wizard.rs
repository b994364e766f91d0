//! Interactive setup wizard driving every collection step in order.

use std::sync::Arc;

use tracing::{error, info};

use crate::collect::{
    ErrorPolicyCollector, RuleCategory, collect_method_selection, collect_rules,
    read_integration_fields,
};
use crate::config::{ConfigurationDocument, assemble};
use crate::error::{Stage, StageContext, StageError};
use crate::prompt::Prompter;
use crate::registry::{RegistryAdapter, Role};
use crate::store::{SettingsStore, StoreError};

/// Result of a completed wizard run.
///
/// The document is usable even when saving it failed.
#[derive(Debug)]
pub struct SetupOutcome {
    pub document: ConfigurationDocument,
    /// Store id the document was written to
    pub saved_to: Option<String>,
    /// Why saving failed, if it did
    pub persist_error: Option<StoreError>,
}

impl SetupOutcome {
    pub fn is_saved(&self) -> bool {
        self.saved_to.is_some()
    }
}

/// Walks a human through building a `ConfigurationDocument`.
///
/// Steps run strictly in order: input selection and fields, output
/// selection and fields, validations, transformations, error handling.
/// Any failing step ends the session without a partial document.
#[derive(Debug, Clone)]
pub struct SetupWizard {
    registry: Arc<dyn RegistryAdapter>,
    store: Option<SettingsStore>,
    policy_collector: ErrorPolicyCollector,
}

impl SetupWizard {
    pub fn new(registry: impl RegistryAdapter + 'static) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    pub fn from_shared(registry: Arc<dyn RegistryAdapter>) -> Self {
        Self {
            registry,
            store: None,
            policy_collector: ErrorPolicyCollector::default(),
        }
    }

    /// Save completed documents to `store`.
    pub fn with_store(mut self, store: SettingsStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_policy_collector(mut self, collector: ErrorPolicyCollector) -> Self {
        self.policy_collector = collector;
        self
    }

    pub fn registry(&self) -> &dyn RegistryAdapter {
        self.registry.as_ref()
    }

    pub fn store(&self) -> Option<&SettingsStore> {
        self.store.as_ref()
    }

    /// Run every collection step and assemble the document without saving.
    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<ConfigurationDocument, StageError> {
        let registry = self.registry.as_ref();

        let input_method = collect_method_selection(prompter, registry, Role::Source)
            .at(Stage::SelectInput, "input method")?;
        let input_config = read_integration_fields(prompter, registry, Role::Source, &input_method)
            .at(Stage::InputFields, &input_method)?;

        let output_method = collect_method_selection(prompter, registry, Role::Destination)
            .at(Stage::SelectOutput, "output method")?;
        let output_config =
            read_integration_fields(prompter, registry, Role::Destination, &output_method)
                .at(Stage::OutputFields, &output_method)?;

        let validations = collect_rules(prompter, RuleCategory::Validations)
            .at(Stage::Validations, "validations")?;
        let transformations = collect_rules(prompter, RuleCategory::Transformations)
            .at(Stage::Transformations, "transformations")?;

        let error_handling = self
            .policy_collector
            .collect(prompter)
            .at(Stage::ErrorHandling, "errorHandling")?;

        Ok(assemble(
            input_method,
            input_config,
            output_method,
            output_config,
            validations,
            transformations,
            error_handling,
        ))
    }

    /// Collect a document and save it to the configured store.
    ///
    /// A failed save is logged and reported in the outcome, never returned
    /// as an error.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<SetupOutcome, StageError> {
        let document = self.collect(prompter)?;

        let Some(store) = &self.store else {
            return Ok(SetupOutcome {
                document,
                saved_to: None,
                persist_error: None,
            });
        };

        match store.persist(&document) {
            Ok(()) => {
                info!(store = store.id(), "setup complete");
                Ok(SetupOutcome {
                    document,
                    saved_to: Some(store.id().to_string()),
                    persist_error: None,
                })
            }
            Err(e) => {
                error!(store = store.id(), error = %e, "failed to save configuration");
                Ok(SetupOutcome {
                    document,
                    saved_to: None,
                    persist_error: Some(e),
                })
            }
        }
    }
}
