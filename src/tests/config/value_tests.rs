//! Tests for ConfigValue normalization.

use crate::config::{ConfigMap, ConfigValue};

#[test]
fn yaml_scalars_of_any_type_load_as_text() {
    let yaml = r#"
Path: /in.csv
Port: 5432
Ratio: 0.5
Enabled: true
Empty: ~
"#;

    let map: ConfigMap = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(map["Path"], ConfigValue::scalar("/in.csv"));
    assert_eq!(map["Port"], ConfigValue::scalar("5432"));
    assert_eq!(map["Ratio"], ConfigValue::scalar("0.5"));
    assert_eq!(map["Enabled"], ConfigValue::scalar("true"));
    assert_eq!(map["Empty"], ConfigValue::scalar(""));
}

#[test]
fn yaml_mappings_load_as_records() {
    let yaml = r#"
Auth:
  User: admin
  Retries: 3
"#;

    let map: ConfigMap = serde_yaml::from_str(yaml).unwrap();
    let auth = map["Auth"].as_record().expect("record");

    assert_eq!(auth["User"].as_str(), Some("admin"));
    assert_eq!(auth["Retries"].as_str(), Some("3"));
    assert!(!map["Auth"].is_scalar());
}

#[test]
fn sequences_are_not_config_values() {
    let result: Result<ConfigMap, _> = serde_yaml::from_str("Hosts: [a, b]");
    assert!(result.is_err());
}

#[test]
fn numeric_looking_text_survives_a_yaml_round_trip() {
    let mut map = ConfigMap::new();
    map.insert("Port".into(), ConfigValue::scalar("5432"));
    map.insert("Flag".into(), ConfigValue::scalar("true"));

    let yaml = serde_yaml::to_string(&map).unwrap();
    let back: ConfigMap = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(back, map);
}

#[test]
fn display_renders_records_inline() {
    let mut inner = ConfigMap::new();
    inner.insert("a".into(), "1".into());
    inner.insert("b".into(), "2".into());
    assert_eq!(ConfigValue::Record(inner).to_string(), "{a: 1, b: 2}");
}
