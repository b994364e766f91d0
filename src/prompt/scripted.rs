//! Scripted prompter for tests and unattended runs.

use std::collections::VecDeque;

use super::{PromptError, Prompter};

/// Prompter that answers from a fixed script, in order.
///
/// Every label it is asked is recorded so callers can check which prompts
/// were issued. Running out of answers aborts the interaction.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a new prompter with the given answers.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Append another answer to the script.
    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Labels of every prompt issued so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, label: &str) -> Result<String, PromptError> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::aborted(label))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, label: &str, items: &[String]) -> Result<String, PromptError> {
        let answer = self.next_answer(label)?;
        if items.contains(&answer) {
            Ok(answer)
        } else {
            Err(PromptError::InvalidChoice {
                label: label.to_string(),
                answer,
            })
        }
    }

    fn input(&mut self, label: &str) -> Result<String, PromptError> {
        self.next_answer(label)
    }
}
