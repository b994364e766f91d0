//! CLI helpers for the setup front-end.
//!
//! This module provides the application mode prompt that precedes the
//! wizard and the argument types the `pipeconf` binary parses.
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use pipeconf::cli::AppMode;
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let mode_ref = reader.add::<AppMode>(tag::both('m', "mode"));
//! let args = reader.parse()?;
//! let mode = mode_ref.get(&args);
//! ```

use std::fmt;
use std::path::PathBuf;

use crate::error::{Stage, StageContext, StageError};
use crate::prompt::{PromptError, Prompter};

#[cfg(feature = "sarge")]
mod sarge;

#[cfg(feature = "sarge")]
pub use self::sarge::UnknownMode;

/// Default settings file written next to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// How the application should run once configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Hand the configuration to the pipeline server
    Server,
    /// Configure and run from the command line
    Cli,
}

impl AppMode {
    pub const ALL: [AppMode; 2] = [AppMode::Server, AppMode::Cli];

    /// Menu label shown in the mode prompt.
    pub fn label(&self) -> &'static str {
        match self {
            AppMode::Server => "Start HTTP Server",
            AppMode::Cli => "Use CLI",
        }
    }

    /// Parse a mode from a short name or its menu label.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        AppMode::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .or_else(|| match s.to_ascii_lowercase().as_str() {
                "server" | "http" => Some(AppMode::Server),
                "cli" => Some(AppMode::Cli),
                _ => None,
            })
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const MODE_LABEL: &str = "Choose Application Mode";

/// Ask whether to start the server or use the CLI.
pub fn ask_for_mode(prompter: &mut dyn Prompter) -> Result<AppMode, StageError> {
    let items: Vec<String> = AppMode::ALL.iter().map(|m| m.label().to_string()).collect();
    let answer = prompter
        .select(MODE_LABEL, &items)
        .at(Stage::SelectMode, "application mode")?;

    AppMode::from_name(&answer)
        .ok_or_else(|| PromptError::InvalidChoice {
            label: MODE_LABEL.to_string(),
            answer,
        })
        .at(Stage::SelectMode, "application mode")
}

/// Options accepted by the `pipeconf` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Settings file to load or write
    pub config: PathBuf,
    /// Run the wizard even when the settings file exists
    pub reconfigure: bool,
    /// Use line-based prompts instead of terminal menus
    pub plain: bool,
    /// Skip the mode prompt
    pub mode: Option<AppMode>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            reconfigure: false,
            plain: false,
            mode: None,
        }
    }
}

impl CliOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = path.into();
        self
    }

    pub fn with_reconfigure(mut self) -> Self {
        self.reconfigure = true;
        self
    }

    pub fn with_plain(mut self) -> Self {
        self.plain = true;
        self
    }

    pub fn with_mode(mut self, mode: AppMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Whether the wizard should run rather than reuse the settings file.
    pub fn should_run_wizard(&self) -> bool {
        self.reconfigure || !self.config.is_file()
    }
}
