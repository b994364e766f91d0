//! Tests for rule-set collection.

use crate::collect::{RuleCategory, collect_rules};
use crate::prompt::ScriptedPrompter;

#[test]
fn lines_are_joined_until_the_empty_line() {
    let mut p = ScriptedPrompter::new(["a>0", "b<10", "", "never read"]);

    let rules = collect_rules(&mut p, RuleCategory::Validations).unwrap();

    assert_eq!(rules.as_str(), "a>0\nb<10\n");
    assert_eq!(p.remaining(), 1);
}

#[test]
fn immediate_empty_line_gives_empty_rules() {
    let mut p = ScriptedPrompter::new([""]);
    let rules = collect_rules(&mut p, RuleCategory::Transformations).unwrap();
    assert!(rules.is_empty());
    assert_eq!(rules.as_str(), "");
}

#[test]
fn whitespace_line_is_a_rule_not_the_terminator() {
    let mut p = ScriptedPrompter::new([" ", ""]);
    let rules = collect_rules(&mut p, RuleCategory::Validations).unwrap();
    assert_eq!(rules.as_str(), " \n");
}

#[test]
fn failed_read_discards_collected_lines() {
    let mut p = ScriptedPrompter::new(["a>0"]);
    let err = collect_rules(&mut p, RuleCategory::Validations).unwrap_err();
    assert_eq!(
        err.label(),
        "Enter validations rules (multiline, finish with empty line)"
    );
}

#[test]
fn every_line_uses_the_category_label() {
    let mut p = ScriptedPrompter::new(["upper(name)", ""]);
    collect_rules(&mut p, RuleCategory::Transformations).unwrap();
    assert!(p
        .asked()
        .iter()
        .all(|l| l == "Enter transformations rules (multiline, finish with empty line)"));
    assert_eq!(p.asked().len(), 2);
}
