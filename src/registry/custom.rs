//! Custom integration support.
//!
//! This module allows plugins to contribute integrations from data (a name
//! and a field list) without defining a new type.

use super::{FieldKind, FieldSpec, Integration};

/// An integration described entirely by its name and declared fields.
///
/// # Example
///
/// ```rust,ignore
/// use pipeconf::registry::{CustomIntegration, FieldKind, IntegrationRegistry};
///
/// let registry = IntegrationRegistry::new().with_source(
///     CustomIntegration::new("HTTP Poller")
///         .with_field("Url", FieldKind::Text)
///         .with_field("IntervalSeconds", FieldKind::Unsigned),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomIntegration {
    /// Unique name for this integration
    pub name: String,
    /// Declared fields, in prompt order
    pub fields: Vec<FieldSpec>,
}

impl CustomIntegration {
    /// Create a new custom integration with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec::new(name, kind));
        self
    }

    /// Append several text fields.
    pub fn with_text_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(FieldSpec::text));
        self
    }
}

impl Integration for CustomIntegration {
    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<FieldSpec> {
        self.fields.clone()
    }
}
