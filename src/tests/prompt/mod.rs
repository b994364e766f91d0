//! Prompt channel tests.


#[cfg(feature = "terminal")]
mod terminal_tests;
