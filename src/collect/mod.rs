//! Interactive collection steps.
//!
//! This module provides:
//! - `collect_method_selection` / `collect_fields`: Integration choice and its fields
//! - `read_integration_fields`: Registry lookup, introspection and collection in one step
//! - `collect_rules`: Free-text rule sets terminated by an empty line
//! - `ErrorPolicyCollector`: Error-handling strategy and optional quarantine sink

mod fields;
mod policy;
mod rules;

pub use fields::{collect_fields, collect_method_selection, read_integration_fields};
pub use policy::{ErrorPolicyCollector, collect_error_policy};
pub use rules::{RuleCategory, collect_rules};
