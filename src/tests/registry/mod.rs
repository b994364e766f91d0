//! Registry and schema tests.

mod registry_tests;
