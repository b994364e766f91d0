//! Terminal prompts backed by `dialoguer`.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use super::{PromptError, Prompter};

/// Prompter drawing arrow-key menus and text inputs on the terminal.
///
/// Pressing Esc or `q` in a menu, or Ctrl-C anywhere, aborts.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl std::fmt::Debug for TerminalPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPrompter").finish()
    }
}

impl TerminalPrompter {
    /// Create a new terminal prompter.
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn channel_error(label: &str, err: dialoguer::Error) -> PromptError {
    let dialoguer::Error::IO(source) = err;
    PromptError::from_io(label, source)
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, label: &str, items: &[String]) -> Result<String, PromptError> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| channel_error(label, e))?;

        picked
            .and_then(|i| items.get(i).cloned())
            .ok_or_else(|| PromptError::aborted(label))
    }

    fn input(&mut self, label: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| channel_error(label, e))
    }
}
