//! Settings store for persisting and reloading configuration documents.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ConfigurationDocument;
use crate::format::{self, FormatError, FormatKind};
use crate::io::{FileBackend, StoreBackend};

/// Errors raised while persisting or loading a document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store location could not be opened
    #[error("cannot open settings store '{target}': {source}")]
    Open {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the opened store failed
    #[error("I/O error on settings store '{target}': {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The store format could not be determined or is disabled
    #[error("unsupported settings store '{target}': {source}")]
    Format {
        target: String,
        #[source]
        source: FormatError,
    },

    /// The document could not be serialized
    #[error("cannot encode settings for '{target}': {source}")]
    Encode {
        target: String,
        #[source]
        source: FormatError,
    },

    /// The stored content is not a valid document
    #[error("cannot decode settings from '{target}': {source}")]
    Decode {
        target: String,
        #[source]
        source: FormatError,
    },
}

impl StoreError {
    /// Identifier of the store the error refers to.
    pub fn target(&self) -> &str {
        match self {
            StoreError::Open { target, .. }
            | StoreError::Io { target, .. }
            | StoreError::Format { target, .. }
            | StoreError::Encode { target, .. }
            | StoreError::Decode { target, .. } => target,
        }
    }
}

/// Explicit handle on a settings document location.
///
/// Each `persist` or `load` opens the backend, performs one full write or
/// read, and releases it.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    backend: Arc<dyn StoreBackend>,
    format: FormatKind,
}

impl SettingsStore {
    /// Create a store over any backend.
    pub fn new(backend: Arc<dyn StoreBackend>, format: FormatKind) -> Self {
        Self { backend, format }
    }

    /// Create a file store, choosing the format from the file extension.
    pub fn at_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let format = FormatKind::for_path(path).map_err(|source| StoreError::Format {
            target: path.to_string_lossy().into_owned(),
            source,
        })?;
        Ok(Self::new(Arc::new(FileBackend::new(path)), format))
    }

    /// Identifier of the underlying location.
    pub fn id(&self) -> &str {
        self.backend.id()
    }

    pub fn format(&self) -> FormatKind {
        self.format
    }

    /// Filesystem path of the store, if it is file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.backend.path()
    }

    /// Write every top-level field of `doc`, replacing any existing content.
    pub fn persist(&self, doc: &ConfigurationDocument) -> Result<(), StoreError> {
        let target = self.backend.id();
        self.ensure_available()?;

        let bytes = format::serialize(self.format, doc).map_err(|source| StoreError::Encode {
            target: target.to_string(),
            source,
        })?;

        let mut writer = self
            .backend
            .open_overwrite()
            .map_err(|source| StoreError::Open {
                target: target.to_string(),
                source,
            })?;

        writer
            .write_all(&bytes)
            .and_then(|_| writer.flush())
            .map_err(|source| StoreError::Io {
                target: target.to_string(),
                source,
            })?;

        info!(store = target, format = %self.format, bytes = bytes.len(), "configuration saved");
        Ok(())
    }

    /// Read the stored document back.
    ///
    /// Missing keys take their empty defaults and an empty store yields an
    /// empty document.
    pub fn load(&self) -> Result<ConfigurationDocument, StoreError> {
        let target = self.backend.id();
        self.ensure_available()?;

        let mut reader = self.backend.open_read().map_err(|source| StoreError::Open {
            target: target.to_string(),
            source,
        })?;

        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| StoreError::Io {
                target: target.to_string(),
                source,
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(store = target, "settings store is empty");
            return Ok(ConfigurationDocument::default());
        }

        let doc: ConfigurationDocument =
            format::deserialize(self.format, &bytes).map_err(|source| StoreError::Decode {
                target: target.to_string(),
                source,
            })?;

        info!(store = target, format = %self.format, "configuration loaded");
        Ok(doc.normalize())
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.format.is_available() {
            Ok(())
        } else {
            Err(StoreError::Format {
                target: self.backend.id().to_string(),
                source: FormatError::NotEnabled(self.format),
            })
        }
    }
}

/// Persist a document to a file, choosing the format from the extension.
pub fn persist(doc: &ConfigurationDocument, path: impl AsRef<Path>) -> Result<(), StoreError> {
    SettingsStore::at_path(path)?.persist(doc)
}

/// Load a document from a file, choosing the format from the extension.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigurationDocument, StoreError> {
    SettingsStore::at_path(path)?.load()
}
