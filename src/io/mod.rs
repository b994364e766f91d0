//! Storage backends for the settings store.
//!
//! This module provides:
//! - `StoreBackend`: Trait for a readable, overwritable document location
//! - `FileBackend`: A document on the local filesystem
//! - `InMemoryBackend`: A shared in-memory buffer for testing

use std::fmt::Debug;
use std::io::{Read, Write};
use std::path::Path;

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::InMemoryBackend;

/// Trait for settings store backends.
///
/// A backend is opened fresh for every read or write; it holds no open
/// handle between calls.
pub trait StoreBackend: Send + Sync + Debug {
    /// Returns a unique identifier for this location.
    ///
    /// This is used for error messages and logging.
    /// Convention: the file path for files.
    fn id(&self) -> &str;

    /// Open a new readable stream positioned at the beginning.
    fn open_read(&self) -> std::io::Result<Box<dyn Read + Send>>;

    /// Open the location for writing, truncating any existing content.
    fn open_overwrite(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Filesystem path, if the backend has one.
    fn path(&self) -> Option<&Path> {
        None
    }
}
