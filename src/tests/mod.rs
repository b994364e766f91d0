//! Internal test modules.

mod error;
mod format;
mod io;
mod prompt;
mod registry;
