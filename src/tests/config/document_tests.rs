//! Tests for ConfigurationDocument shape and assembly.

use crate::config::{
    ConfigMap, ConfigValue, ConfigurationDocument, ErrorHandlingPolicy, QuarantineOutput,
    RuleSet, assemble,
};

fn fields(pairs: &[(&str, &str)]) -> ConfigMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ConfigValue::scalar(*v)))
        .collect()
}

#[test]
fn assemble_is_a_structural_merge() {
    let doc = assemble(
        "CSV",
        fields(&[("Path", "/in.csv")]),
        "SQL",
        fields(&[("DSN", "postgres://x"), ("Table", "out")]),
        RuleSet::from_text("not_null(id)\n"),
        RuleSet::new(),
        ErrorHandlingPolicy::new("STOP_ON_ERROR"),
    );

    assert_eq!(doc.input_method, "CSV");
    assert_eq!(doc.output_method, "SQL");
    assert_eq!(doc.input_config, fields(&[("Path", "/in.csv")]));
    assert_eq!(doc.output_config.len(), 2);
    assert_eq!(doc.validations.as_str(), "not_null(id)\n");
    assert!(doc.transformations.is_empty());
    assert_eq!(doc.error_handling.strategy, "STOP_ON_ERROR");
}

#[test]
fn top_level_keys_are_camel_case() {
    let doc = ConfigurationDocument {
        input_method: "CSV".into(),
        ..Default::default()
    };
    let value: serde_yaml::Value = serde_yaml::to_value(&doc).unwrap();
    let map = value.as_mapping().unwrap();

    for key in [
        "inputMethod",
        "outputMethod",
        "inputConfig",
        "outputConfig",
        "validations",
        "transformations",
        "errorHandling",
    ] {
        assert!(map.contains_key(key), "missing {key}");
    }
}

#[test]
fn quarantine_is_omitted_when_absent() {
    let policy = ErrorHandlingPolicy::new("LOG_AND_CONTINUE");
    let yaml = serde_yaml::to_string(&policy).unwrap();
    assert_eq!(yaml.trim(), "strategy: LOG_AND_CONTINUE");

    let with = policy.with_quarantine(QuarantineOutput::new("file", "/tmp/bad"));
    let yaml = serde_yaml::to_string(&with).unwrap();
    assert!(yaml.contains("quarantineOutput:"));
    assert!(yaml.contains("type: file"));
}

#[test]
fn lowercase_keys_from_older_stores_are_accepted() {
    let yaml = r#"
inputmethod: CSV
outputmethod: SQL
inputconfig:
  path: /in.csv
outputconfig:
  dsn: postgres://x
validations: ""
transformations: ""
errorhandling:
  strategy: QUARANTINE
  quarantineoutput:
    type: file
    location: /tmp/q
"#;

    let doc: ConfigurationDocument = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(doc.input_method, "CSV");
    assert_eq!(doc.input_config["path"].as_str(), Some("/in.csv"));
    assert_eq!(doc.output_config["dsn"].as_str(), Some("postgres://x"));
    assert_eq!(
        doc.error_handling.quarantine_output,
        Some(QuarantineOutput::new("file", "/tmp/q"))
    );
}

#[test]
fn missing_keys_default_to_empty() {
    let doc: ConfigurationDocument = serde_yaml::from_str("inputMethod: CSV\n").unwrap();
    assert_eq!(doc.input_method, "CSV");
    assert!(doc.output_method.is_empty());
    assert!(doc.output_config.is_empty());
    assert!(doc.error_handling.strategy.is_empty());
}

#[test]
fn normalize_drops_empty_quarantine() {
    let mut doc = ConfigurationDocument::default();
    doc.error_handling.quarantine_output = Some(QuarantineOutput::default());
    assert_eq!(doc.normalize().error_handling.quarantine_output, None);
}

#[test]
fn quarantine_from_fields_tolerates_missing_keys() {
    let q = QuarantineOutput::from_fields(&fields(&[("type", "kafka")]));
    assert_eq!(q, QuarantineOutput::new("kafka", ""));
    assert_eq!(QuarantineOutput::schema().names(), vec!["type", "location"]);
}
