//! Integration registry and schema introspection.
//!
//! This module provides:
//! - `Integration`: Trait every source/destination plugin implements
//! - `FieldKind` / `FieldSpec` / `FieldSchema`: The declared configuration surface
//! - `RegistryAdapter`: Lookup of integrations by role and name
//! - `IntegrationRegistry`: The in-process registry implementation
//! - `CustomIntegration`: Data-driven integrations registered at runtime

use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Debug};
use std::sync::Arc;

use thiserror::Error;

mod builtin;
mod custom;

pub use builtin::{
    CloudStorage, CsvOutput, CsvSource, KafkaQueue, NoSqlDatabase, SqlDatabase,
};
pub use custom::CustomIntegration;

/// The type of a single configuration field.
///
/// Only the scalar kinds can be collected with a single text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Integer,
    Unsigned,
    Float,
    Boolean,
    /// A nested record of further fields
    Record,
    /// A repeated value
    List,
    /// A free-form key/value mapping
    Map,
}

impl FieldKind {
    /// Whether the field can be answered with one line of text.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldKind::Record | FieldKind::List | FieldKind::Map)
    }

    /// Human readable type label shown next to the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "int",
            FieldKind::Unsigned => "uint",
            FieldKind::Float => "float",
            FieldKind::Boolean => "bool",
            FieldKind::Record => "record",
            FieldKind::List => "list",
            FieldKind::Map => "map",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One declared configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }
}

/// The ordered, validated field list of one integration.
///
/// Built on demand each time an integration is selected and discarded after
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    integration: String,
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Validate a declared field list into a schema.
    ///
    /// Fails when any field is not a scalar or a name is declared twice.
    pub fn new(integration: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let integration = integration.into();
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !field.kind.is_scalar() {
                return Err(SchemaError::NotFlat {
                    integration,
                    field: field.name.clone(),
                    kind: field.kind,
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    integration,
                    field: field.name.clone(),
                });
            }
        }
        Ok(Self {
            integration,
            fields,
        })
    }

    /// Schema for a field list known to be flat and free of duplicates.
    pub(crate) fn new_unchecked(integration: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            integration: integration.into(),
            fields,
        }
    }

    /// Name of the integration this schema describes.
    pub fn integration(&self) -> &str {
        &self.integration
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Errors raised while deriving a field schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A field cannot be collected with a single prompt
    #[error("integration '{integration}' is not a flat record: field '{field}' is a {kind}")]
    NotFlat {
        integration: String,
        field: String,
        kind: FieldKind,
    },

    /// Two fields share a name
    #[error("integration '{integration}' declares field '{field}' more than once")]
    DuplicateField { integration: String, field: String },
}

/// A source or destination plugin with a flat configuration surface.
pub trait Integration: Send + Sync + Debug {
    /// Registered name, as shown to the user.
    fn name(&self) -> &str;

    /// Directly declared configuration fields, in declaration order.
    fn fields(&self) -> Vec<FieldSpec>;

    /// Derive the validated schema used to drive field collection.
    fn describe_fields(&self) -> Result<FieldSchema, SchemaError> {
        FieldSchema::new(self.name(), self.fields())
    }
}

/// Which side of the pipeline an integration serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => write!(f, "source"),
            Role::Destination => write!(f, "destination"),
        }
    }
}

/// Errors raised when looking integrations up by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{role} '{name}' is not registered")]
    NotFound { role: Role, name: String },

    #[error("no {0} integrations are registered")]
    Empty(Role),
}

/// Read access to the set of registered integrations.
pub trait RegistryAdapter: Send + Sync + Debug {
    /// Names of all registered sources, sorted.
    fn source_names(&self) -> Vec<String>;

    /// Names of all registered destinations, sorted.
    fn destination_names(&self) -> Vec<String>;

    fn source(&self, name: &str) -> Option<Arc<dyn Integration>>;

    fn destination(&self, name: &str) -> Option<Arc<dyn Integration>>;

    /// Names registered for the given role.
    fn names(&self, role: Role) -> Vec<String> {
        match role {
            Role::Source => self.source_names(),
            Role::Destination => self.destination_names(),
        }
    }

    /// Look an integration up, treating absence as an error.
    fn lookup(&self, role: Role, name: &str) -> Result<Arc<dyn Integration>, RegistryError> {
        let found = match role {
            Role::Source => self.source(name),
            Role::Destination => self.destination(name),
        };
        found.ok_or_else(|| RegistryError::NotFound {
            role,
            name: name.to_string(),
        })
    }
}

/// In-process registry keyed by integration name.
#[derive(Debug, Clone, Default)]
pub struct IntegrationRegistry {
    sources: BTreeMap<String, Arc<dyn Integration>>,
    destinations: BTreeMap<String, Arc<dyn Integration>>,
}

impl IntegrationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source. A later registration under the same name replaces
    /// the earlier one.
    pub fn register_source(&mut self, integration: impl Integration + 'static) {
        let integration: Arc<dyn Integration> = Arc::new(integration);
        self.sources
            .insert(integration.name().to_string(), integration);
    }

    /// Register a destination. A later registration under the same name
    /// replaces the earlier one.
    pub fn register_destination(&mut self, integration: impl Integration + 'static) {
        let integration: Arc<dyn Integration> = Arc::new(integration);
        self.destinations
            .insert(integration.name().to_string(), integration);
    }

    /// Register a source (builder pattern).
    pub fn with_source(mut self, integration: impl Integration + 'static) -> Self {
        self.register_source(integration);
        self
    }

    /// Register a destination (builder pattern).
    pub fn with_destination(mut self, integration: impl Integration + 'static) -> Self {
        self.register_destination(integration);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len() + self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.destinations.is_empty()
    }
}

impl RegistryAdapter for IntegrationRegistry {
    fn source_names(&self) -> Vec<String> {
        self.sources.keys().cloned().collect()
    }

    fn destination_names(&self) -> Vec<String> {
        self.destinations.keys().cloned().collect()
    }

    fn source(&self, name: &str) -> Option<Arc<dyn Integration>> {
        self.sources.get(name).cloned()
    }

    fn destination(&self, name: &str) -> Option<Arc<dyn Integration>> {
        self.destinations.get(name).cloned()
    }
}

/// Create a registry with the bundled integrations.
pub fn default_registry() -> IntegrationRegistry {
    IntegrationRegistry::new()
        .with_source(CsvSource)
        .with_source(SqlDatabase)
        .with_source(KafkaQueue)
        .with_source(CloudStorage)
        .with_destination(SqlDatabase)
        .with_destination(NoSqlDatabase)
        .with_destination(CsvOutput)
        .with_destination(KafkaQueue)
        .with_destination(CloudStorage)
}
