//! Integration selection and per-field collection.

use tracing::{debug, info};

use crate::config::{ConfigMap, ConfigValue};
use crate::error::SetupError;
use crate::prompt::{PromptError, Prompter};
use crate::registry::{FieldSchema, RegistryAdapter, RegistryError, Role};

/// Ask the human to choose one integration of `role`.
///
/// Candidates are offered sorted so the list is stable within a run.
pub fn collect_method_selection(
    prompter: &mut dyn Prompter,
    registry: &dyn RegistryAdapter,
    role: Role,
) -> Result<String, SetupError> {
    let mut candidates = registry.names(role);
    if candidates.is_empty() {
        return Err(RegistryError::Empty(role).into());
    }
    candidates.sort();

    let label = match role {
        Role::Source => "Select Input Method",
        Role::Destination => "Select Output Method",
    };
    let chosen = prompter.select(label, &candidates)?;
    info!(%role, method = %chosen, "integration selected");
    Ok(chosen)
}

/// Prompt once per schema field and collect the answers as text.
///
/// Type labels are shown but not enforced; an empty answer is kept. The
/// first failed prompt aborts the whole collection.
pub fn collect_fields(
    prompter: &mut dyn Prompter,
    schema: &FieldSchema,
) -> Result<ConfigMap, PromptError> {
    let mut config = ConfigMap::new();
    for field in schema.iter() {
        let label = format!("Enter {} ({})", field.name, field.kind);
        let value = prompter.input(&label)?;
        debug!(integration = schema.integration(), field = %field.name, "field collected");
        config.insert(field.name.clone(), ConfigValue::Scalar(value));
    }
    Ok(config)
}

/// Look `method` up, derive its schema, and collect every field.
///
/// Registry and schema failures are raised before any field prompt.
pub fn read_integration_fields(
    prompter: &mut dyn Prompter,
    registry: &dyn RegistryAdapter,
    role: Role,
    method: &str,
) -> Result<ConfigMap, SetupError> {
    let integration = registry.lookup(role, method)?;
    let schema = integration.describe_fields()?;
    info!(%role, method, fields = schema.len(), "collecting integration fields");
    Ok(collect_fields(prompter, &schema)?)
}
