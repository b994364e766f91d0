//! Serialization formats for the settings store.
//!
//! This module provides:
//! - `FormatKind`: Enum representing the document formats a store can use
//! - `FormatError`: Errors that can occur during format operations
//! - `serialize` / `deserialize`: Feature-gated dispatch to the format crates

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Represents the document formats a settings store can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatKind {
    /// YAML format
    #[default]
    Yaml,
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Yaml => write!(f, "yaml"),
            FormatKind::Json => write!(f, "json"),
            FormatKind::Toml => write!(f, "toml"),
        }
    }
}

impl FormatKind {
    /// Parse a format kind from a name or file extension.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(FormatKind::Yaml),
            "json" => Some(FormatKind::Json),
            "toml" => Some(FormatKind::Toml),
            _ => None,
        }
    }

    /// Get file extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Yaml => &["yaml", "yml"],
            FormatKind::Json => &["json"],
            FormatKind::Toml => &["toml"],
        }
    }

    /// Infer the format from a file path.
    ///
    /// A path without an extension is treated as YAML.
    pub fn for_path(path: &Path) -> Result<Self, FormatError> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(FormatKind::Yaml),
            Some(ext) => {
                FormatKind::from_name(ext).ok_or_else(|| FormatError::UnknownExtension(ext.into()))
            }
        }
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            FormatKind::Yaml => true,

            #[cfg(feature = "json")]
            FormatKind::Json => true,
            #[cfg(not(feature = "json"))]
            FormatKind::Json => false,

            #[cfg(feature = "toml")]
            FormatKind::Toml => true,
            #[cfg(not(feature = "toml"))]
            FormatKind::Toml => false,
        }
    }
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file extension does not map to a known format
    #[error("Unknown settings file extension: {0}")]
    UnknownExtension(String),

    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(FormatKind),

    /// Serialization/deserialization error
    #[error("Serde error: {0}")]
    Serde(Box<dyn std::error::Error + Send + Sync>),
}

/// Deserialize from bytes using the specified format.
pub fn deserialize<T: DeserializeOwned>(kind: FormatKind, bytes: &[u8]) -> Result<T, FormatError> {
    match kind {
        FormatKind::Yaml => {
            serde_yaml::from_slice(bytes).map_err(|e| FormatError::Serde(Box::new(e)))
        }

        #[cfg(feature = "json")]
        FormatKind::Json => {
            serde_json::from_slice(bytes).map_err(|e| FormatError::Serde(Box::new(e)))
        }

        #[cfg(feature = "toml")]
        FormatKind::Toml => {
            let s = String::from_utf8_lossy(bytes);
            toml::from_str(&s).map_err(|e| FormatError::Serde(Box::new(e)))
        }

        #[allow(unreachable_patterns)]
        _ => Err(FormatError::NotEnabled(kind)),
    }
}

/// Serialize to bytes using the specified format.
pub fn serialize<T: Serialize>(kind: FormatKind, value: &T) -> Result<Vec<u8>, FormatError> {
    match kind {
        FormatKind::Yaml => serde_yaml::to_string(value)
            .map(|s| s.into_bytes())
            .map_err(|e| FormatError::Serde(Box::new(e))),

        #[cfg(feature = "json")]
        FormatKind::Json => {
            serde_json::to_vec_pretty(value).map_err(|e| FormatError::Serde(Box::new(e)))
        }

        #[cfg(feature = "toml")]
        FormatKind::Toml => toml::to_string_pretty(value)
            .map(|s| s.into_bytes())
            .map_err(|e| FormatError::Serde(Box::new(e))),

        #[allow(unreachable_patterns)]
        _ => Err(FormatError::NotEnabled(kind)),
    }
}
