//! In-memory backend for testing.

use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::StoreBackend;

/// In-memory backend whose clones share one buffer.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_contents(id, Vec::new())
    }

    /// Create a backend pre-filled with data.
    pub fn with_contents(id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(data.into())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the stored bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the stored bytes as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the stored bytes.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl StoreBackend for InMemoryBackend {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_read(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.contents())))
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        self.clear();
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
        }))
    }
}

/// Write handle for in-memory backend.
struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
