//! Line-based prompts for non-interactive terminals and pipes.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{PromptError, Prompter};

/// Prompter that writes questions to `W` and reads answers line by line
/// from `R`.
///
/// Selections accept either the 1-based item number or the exact item
/// text; anything else is reported and asked again. End of input aborts.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create a new line prompter.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, label: &str) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| PromptError::from_io(label, e))?;
        if read == 0 {
            return Err(PromptError::aborted(label));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write(&mut self, label: &str, text: &str) -> Result<(), PromptError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| PromptError::from_io(label, e))
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, label: &str, items: &[String]) -> Result<String, PromptError> {
        let mut menu = format!("{label}\n");
        for (i, item) in items.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, item));
        }
        self.write(label, &menu)?;

        loop {
            self.write(label, "> ")?;
            let answer = self.read_line(label)?;
            let answer = answer.trim();

            let chosen = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| items.get(i))
                .or_else(|| items.iter().find(|item| item.as_str() == answer));

            match chosen {
                Some(item) => return Ok(item.clone()),
                None => self.write(label, &format!("invalid choice: {answer}\n"))?,
            }
        }
    }

    fn input(&mut self, label: &str) -> Result<String, PromptError> {
        self.write(label, &format!("{label}: "))?;
        self.read_line(label)
    }
}
