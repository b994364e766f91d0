//! Free-text rule sets (validations, transformations).

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::Serialize;

/// Accumulated rule text, one rule per line, each line terminated by `\n`.
///
/// Always persisted as a single string. A stored list of strings is also
/// accepted on load and folded into the same text form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RuleSet(String);

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already accumulated text as-is.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build a rule set from individual rules.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for rule in rules {
            set.push(rule.as_ref());
        }
        set
    }

    /// Append one rule followed by a line separator.
    pub fn push(&mut self, rule: &str) {
        self.0.push_str(rule);
        self.0.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Individual non-empty rules.
    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.0.lines().filter(|l| !l.is_empty())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleSet {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

struct RuleSetVisitor;

impl<'de> Visitor<'de> for RuleSetVisitor {
    type Value = RuleSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rule text or a list of rules")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RuleSet, E> {
        Ok(RuleSet::from_text(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RuleSet, E> {
        Ok(RuleSet(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RuleSet, E> {
        Ok(RuleSet::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<RuleSet, E> {
        Ok(RuleSet::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RuleSet, D::Error> {
        RuleSet::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleSet, A::Error> {
        let mut set = RuleSet::new();
        while let Some(rule) = seq.next_element::<String>()? {
            if !rule.is_empty() {
                set.push(&rule);
            }
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RuleSetVisitor)
    }
}
