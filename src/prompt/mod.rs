//! Interactive prompt channel.
//!
//! This module provides:
//! - `Prompter`: Trait for a blocking request/response channel with a human
//! - `LinePrompter`: Plain line-based prompts over any reader/writer
//! - `TerminalPrompter`: Rich terminal prompts (`terminal` feature)
//! - `ScriptedPrompter`: Pre-recorded answers for tests and automation

use std::io;

use thiserror::Error;

mod line;
mod scripted;
#[cfg(feature = "terminal")]
pub(crate) mod terminal;

pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;
#[cfg(feature = "terminal")]
pub use terminal::TerminalPrompter;

/// Trait for interactive prompt channels.
///
/// Both operations block until the human answers or the interaction ends.
pub trait Prompter {
    /// Ask the human to pick one of `items`; returns the chosen item.
    fn select(&mut self, label: &str, items: &[String]) -> Result<String, PromptError>;

    /// Ask the human for one line of free text. An empty answer is valid.
    fn input(&mut self, label: &str) -> Result<String, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, label: &str, items: &[String]) -> Result<String, PromptError> {
        (**self).select(label, items)
    }

    fn input(&mut self, label: &str) -> Result<String, PromptError> {
        (**self).input(label)
    }
}

/// Errors returned by a prompt channel.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The human cancelled or the input ended
    #[error("prompt '{label}' was cancelled")]
    Aborted { label: String },

    /// The answer is not one of the offered items
    #[error("'{answer}' is not a valid choice for '{label}'")]
    InvalidChoice { label: String, answer: String },

    /// The underlying channel failed
    #[error("prompt '{label}' failed: {source}")]
    Channel {
        label: String,
        #[source]
        source: io::Error,
    },
}

impl PromptError {
    pub fn aborted(label: &str) -> Self {
        PromptError::Aborted {
            label: label.to_string(),
        }
    }

    /// Map a channel I/O error, treating interrupts and EOF as cancellation.
    pub fn from_io(label: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => Self::aborted(label),
            _ => PromptError::Channel {
                label: label.to_string(),
                source,
            },
        }
    }

    /// Label of the prompt that failed.
    pub fn label(&self) -> &str {
        match self {
            PromptError::Aborted { label }
            | PromptError::InvalidChoice { label, .. }
            | PromptError::Channel { label, .. } => label,
        }
    }
}
