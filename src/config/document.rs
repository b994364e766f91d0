//! The canonical pipeline configuration document.

use serde::{Deserialize, Serialize};

use super::{ConfigMap, ConfigValue, RuleSet};
use crate::registry::{FieldSchema, FieldSpec};

/// Root configuration produced by the setup wizard and read back by the
/// settings store.
///
/// Keys are persisted in camelCase. The all-lowercase spellings written by
/// older stores are accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationDocument {
    /// Name of the selected source integration
    #[serde(alias = "inputmethod")]
    pub input_method: String,
    /// Name of the selected destination integration
    #[serde(alias = "outputmethod")]
    pub output_method: String,
    /// Field values for the source
    #[serde(alias = "inputconfig")]
    pub input_config: ConfigMap,
    /// Field values for the destination
    #[serde(alias = "outputconfig")]
    pub output_config: ConfigMap,
    pub validations: RuleSet,
    pub transformations: RuleSet,
    #[serde(alias = "errorhandling")]
    pub error_handling: ErrorHandlingPolicy,
}

/// How the pipeline reacts to records that fail processing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorHandlingPolicy {
    /// Strategy label, e.g. `LOG_AND_CONTINUE` or `STOP_ON_ERROR`. Not validated.
    pub strategy: String,
    /// Quarantine sink, present only for strategies that isolate failures
    #[serde(alias = "quarantineoutput", skip_serializing_if = "Option::is_none")]
    pub quarantine_output: Option<QuarantineOutput>,
}

impl ErrorHandlingPolicy {
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            quarantine_output: None,
        }
    }

    pub fn with_quarantine(mut self, quarantine: QuarantineOutput) -> Self {
        self.quarantine_output = Some(quarantine);
        self
    }
}

/// Destination for quarantined records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarantineOutput {
    /// Sink kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Sink address or path
    pub location: String,
}

impl QuarantineOutput {
    pub fn new(kind: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            location: location.into(),
        }
    }

    /// Fields prompted for when a strategy needs a quarantine sink.
    pub fn schema() -> FieldSchema {
        FieldSchema::new_unchecked(
            "quarantineOutput",
            vec![FieldSpec::text("type"), FieldSpec::text("location")],
        )
    }

    /// Build from collected `type`/`location` fields; absent fields are empty.
    pub fn from_fields(fields: &ConfigMap) -> Self {
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(ConfigValue::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self::new(text("type"), text("location"))
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.location.is_empty()
    }
}

impl ConfigurationDocument {
    /// Collapse shapes that differ between stores but mean the same thing.
    ///
    /// An all-empty quarantine output is treated as absent.
    pub fn normalize(mut self) -> Self {
        if self
            .error_handling
            .quarantine_output
            .as_ref()
            .is_some_and(QuarantineOutput::is_empty)
        {
            self.error_handling.quarantine_output = None;
        }
        self
    }
}

/// Merge collected parts into one document.
///
/// Purely structural: nothing is renamed, reinterpreted, or validated.
pub fn assemble(
    input_method: impl Into<String>,
    input_config: ConfigMap,
    output_method: impl Into<String>,
    output_config: ConfigMap,
    validations: RuleSet,
    transformations: RuleSet,
    error_handling: ErrorHandlingPolicy,
) -> ConfigurationDocument {
    ConfigurationDocument {
        input_method: input_method.into(),
        output_method: output_method.into(),
        input_config,
        output_config,
        validations,
        transformations,
        error_handling,
    }
}
