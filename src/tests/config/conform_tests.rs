//! Tests for reconciling stored fields against current schemas.

use crate::config::{ConfigMap, ConfigValue, ConfigurationDocument, conform};
use crate::registry::{CustomIntegration, Integration, IntegrationRegistry};

fn registry() -> IntegrationRegistry {
    IntegrationRegistry::new()
        .with_source(CustomIntegration::new("CSV").with_text_fields(["Path", "Delimiter"]))
        .with_destination(CustomIntegration::new("SQL").with_text_fields(["DSN", "Table"]))
}

#[test]
fn conform_reports_missing_unexpected_and_mistyped() {
    let schema = CustomIntegration::new("SQL")
        .with_text_fields(["DSN", "Table", "Schema"])
        .describe_fields()
        .unwrap();

    let mut config = ConfigMap::new();
    config.insert("DSN".into(), "postgres://x".into());
    config.insert("Table".into(), ConfigValue::Record(ConfigMap::new()));
    config.insert("Legacy".into(), "1".into());

    let c = conform(&schema, &config);

    assert_eq!(c.integration, "SQL");
    assert_eq!(c.missing, vec!["Schema"]);
    assert_eq!(c.unexpected, vec!["Legacy"]);
    assert_eq!(c.mistyped, vec!["Table"]);
    assert!(!c.is_clean());
}

#[test]
fn matching_document_is_clean() {
    let mut doc = ConfigurationDocument {
        input_method: "CSV".into(),
        output_method: "SQL".into(),
        ..Default::default()
    };
    doc.input_config.insert("Path".into(), "/in.csv".into());
    doc.input_config.insert("Delimiter".into(), ",".into());
    doc.output_config.insert("DSN".into(), "postgres://x".into());
    doc.output_config.insert("Table".into(), "out".into());

    let report = doc.conform_to_registry(&registry());
    assert!(report.is_clean());
}

#[test]
fn unregistered_integration_is_skipped_not_fatal() {
    let doc = ConfigurationDocument {
        input_method: "Kafka".into(),
        output_method: "SQL".into(),
        ..Default::default()
    };

    let report = doc.conform_to_registry(&registry());

    assert!(report.input.is_none());
    assert!(!report.is_clean());
    let output = report.output.as_ref().expect("SQL is registered");
    assert_eq!(output.missing, vec!["DSN", "Table"]);
}

#[test]
fn lowercased_field_names_still_conform() {
    let doc: ConfigurationDocument = serde_yaml::from_str(
        "inputmethod: CSV\ninputconfig:\n  path: /in.csv\n  delimiter: ','\n\
         outputmethod: SQL\noutputconfig:\n  dsn: postgres://x\n  table: out\n",
    )
    .unwrap();

    let report = doc.conform_to_registry(&registry());
    assert!(report.is_clean());
}

#[test]
fn ambiguous_case_folded_names_are_not_matched() {
    let schema = CustomIntegration::new("SQL")
        .with_text_fields(["DSN"])
        .describe_fields()
        .unwrap();
    let mut config = ConfigMap::new();
    config.insert("dsn".into(), "a".into());
    config.insert("Dsn".into(), "b".into());

    let c = conform(&schema, &config);

    assert_eq!(c.missing, vec!["DSN"]);
    assert_eq!(c.unexpected, vec!["Dsn", "dsn"]);
}

#[test]
fn exact_name_wins_over_case_folded_duplicate() {
    let schema = CustomIntegration::new("SQL")
        .with_text_fields(["DSN"])
        .describe_fields()
        .unwrap();
    let mut config = ConfigMap::new();
    config.insert("DSN".into(), "a".into());
    config.insert("dsn".into(), "b".into());

    let c = conform(&schema, &config);

    assert!(c.missing.is_empty());
    assert_eq!(c.unexpected, vec!["dsn"]);
}
