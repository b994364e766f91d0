//! Tests for IntegrationRegistry lookups.

use crate::registry::{
    CustomIntegration, IntegrationRegistry, RegistryAdapter, RegistryError, Role,
    default_registry,
};

fn registry() -> IntegrationRegistry {
    IntegrationRegistry::new()
        .with_source(CustomIntegration::new("CSV").with_text_fields(["Path"]))
        .with_source(CustomIntegration::new("API").with_text_fields(["Url"]))
        .with_destination(CustomIntegration::new("SQL").with_text_fields(["DSN", "Table"]))
}

#[test]
fn names_are_sorted_per_role() {
    let registry = registry();
    assert_eq!(registry.source_names(), vec!["API", "CSV"]);
    assert_eq!(registry.destination_names(), vec!["SQL"]);
    assert_eq!(registry.names(Role::Destination), vec!["SQL"]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn lookup_unknown_name_is_not_found() {
    let registry = registry();
    let err = registry.lookup(Role::Source, "Kafka").unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            role: Role::Source,
            name: "Kafka".into(),
        }
    );
    assert_eq!(err.to_string(), "source 'Kafka' is not registered");
}

#[test]
fn lookup_respects_role() {
    let registry = registry();
    assert!(registry.lookup(Role::Destination, "SQL").is_ok());
    assert!(registry.lookup(Role::Source, "SQL").is_err());
}

#[test]
fn later_registration_replaces_earlier() {
    let mut registry = registry();
    registry.register_source(CustomIntegration::new("CSV").with_text_fields(["Path", "Delimiter"]));

    let csv = registry.lookup(Role::Source, "CSV").unwrap();
    assert_eq!(csv.describe_fields().unwrap().len(), 2);
    assert_eq!(registry.source_names().len(), 2);
}

#[test]
fn default_registry_offers_both_sides() {
    let registry = default_registry();
    assert!(registry.source_names().contains(&"CSV".to_string()));
    assert!(registry.destination_names().contains(&"CSV Output".to_string()));
    assert!(registry.source("SQL Database").is_some());
    assert!(registry.destination("SQL Database").is_some());
}
