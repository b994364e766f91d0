//! Filesystem backend.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::StoreBackend;

/// Backend reading and writing a single file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    id: String,
    path: PathBuf,
}

impl FileBackend {
    /// Create a new file backend.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Whether the file currently exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl StoreBackend for FileBackend {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_read(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(file))
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
