//! Storage backend tests.

mod backend_tests;
