//! Configuration document types.
//!
//! This module provides:
//! - `ConfigurationDocument`: The canonical document the wizard produces
//! - `ErrorHandlingPolicy` / `QuarantineOutput`: The nested error-handling section
//! - `ConfigValue` / `ConfigMap`: Per-integration field values
//! - `RuleSet`: Accumulated validation or transformation rule text
//! - `assemble`: Structural merge of collected parts
//! - `conform`: Reconciliation of stored fields against integration schemas

mod conform;
mod document;
mod rule_set;
mod value;

pub use conform::{Conformance, ReconcileReport, conform};
pub use document::{
    ConfigurationDocument, ErrorHandlingPolicy, QuarantineOutput, assemble,
};
pub use rule_set::RuleSet;
pub use value::{ConfigMap, ConfigValue};
