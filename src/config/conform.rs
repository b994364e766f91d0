//! Reconciling loaded configuration against the current integration schemas.

use tracing::warn;

use super::{ConfigMap, ConfigValue, ConfigurationDocument};
use crate::registry::{FieldSchema, RegistryAdapter, Role};

/// How one integration's stored fields line up with its current schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformance {
    pub integration: String,
    /// Schema fields with no stored value, in declaration order
    pub missing: Vec<String>,
    /// Stored fields the schema does not declare
    pub unexpected: Vec<String>,
    /// Schema fields whose stored value is a record instead of text
    pub mistyped: Vec<String>,
}

impl Conformance {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.mistyped.is_empty()
    }
}

/// Stored key for `name`: the exact spelling, else the only key equal to
/// it ignoring ASCII case (stores written with lowercased field names).
fn stored_key<'a>(config: &'a ConfigMap, name: &str) -> Option<&'a str> {
    if let Some((key, _)) = config.get_key_value(name) {
        return Some(key);
    }
    let mut folded = config.keys().filter(|key| key.eq_ignore_ascii_case(name));
    match (folded.next(), folded.next()) {
        (Some(key), None) => Some(key),
        _ => None,
    }
}

/// Compare stored values with the fields a schema declares.
///
/// Field names match exactly, or case-insensitively when no exact key
/// exists and the match is unambiguous.
pub fn conform(schema: &FieldSchema, config: &ConfigMap) -> Conformance {
    let mut missing = Vec::new();
    let mut mistyped = Vec::new();
    let mut matched = Vec::new();
    for field in schema.iter() {
        let Some(key) = stored_key(config, &field.name) else {
            missing.push(field.name.clone());
            continue;
        };
        matched.push(key);
        if let Some(ConfigValue::Record(_)) = config.get(key) {
            mistyped.push(field.name.clone());
        }
    }

    let unexpected = config
        .keys()
        .filter(|key| !matched.contains(&key.as_str()))
        .cloned()
        .collect();

    Conformance {
        integration: schema.integration().to_string(),
        missing,
        unexpected,
        mistyped,
    }
}

/// Reconciliation results for both sides of a document.
///
/// A side is `None` when its integration is no longer registered or no
/// longer yields a usable schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    pub input: Option<Conformance>,
    pub output: Option<Conformance>,
}

impl ReconcileReport {
    /// True when both sides were checked and matched their schemas.
    pub fn is_clean(&self) -> bool {
        matches!((&self.input, &self.output), (Some(i), Some(o)) if i.is_clean() && o.is_clean())
    }
}

impl ConfigurationDocument {
    /// Re-derive each selected integration's schema and compare it with the
    /// stored fields. Never fails: differences are reported and logged.
    pub fn conform_to_registry(&self, registry: &dyn RegistryAdapter) -> ReconcileReport {
        ReconcileReport {
            input: conform_side(registry, Role::Source, &self.input_method, &self.input_config),
            output: conform_side(
                registry,
                Role::Destination,
                &self.output_method,
                &self.output_config,
            ),
        }
    }
}

fn conform_side(
    registry: &dyn RegistryAdapter,
    role: Role,
    method: &str,
    config: &ConfigMap,
) -> Option<Conformance> {
    let integration = match registry.lookup(role, method) {
        Ok(integration) => integration,
        Err(e) => {
            warn!(%role, method, error = %e, "stored integration is no longer registered");
            return None;
        }
    };

    let schema = match integration.describe_fields() {
        Ok(schema) => schema,
        Err(e) => {
            warn!(%role, method, error = %e, "stored integration has an unusable schema");
            return None;
        }
    };

    let conformance = conform(&schema, config);
    if !conformance.is_clean() {
        warn!(
            %role,
            method,
            missing = ?conformance.missing,
            unexpected = ?conformance.unexpected,
            mistyped = ?conformance.mistyped,
            "stored fields differ from the current schema"
        );
    }
    Some(conformance)
}
