//! Plain line-based prompting for input that is not a terminal
//!
//! Answers come one per line, e.g. from a pipe. End of input counts as an
//! empty answer so that every prompt falls back to its default.

use super::interface::{Prompter, TextPromptConfig};
use crate::error::Result;
use console::Term;
use std::cell::RefCell;
use std::io::BufRead;

/// Reads answers line by line from `reader`.
pub struct LinePrompter<R> {
    reader: RefCell<R>,
    echo: Option<Term>,
}

impl<R: BufRead> LinePrompter<R> {
    /// A prompter that reads silently.
    pub fn new(reader: R) -> Self {
        Self { reader: RefCell::new(reader), echo: None }
    }

    /// Prints each prompt to `term` before reading the answer.
    pub fn with_echo(mut self, term: Term) -> Self {
        self.echo = Some(term);
        self
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        if let Some(term) = &self.echo {
            term.write_line(&config.prompt)?;
        }

        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;
        let answer = line.trim_end_matches(['\r', '\n']);

        if read == 0 || answer.is_empty() {
            log::debug!("No answer for '{}', using the default", config.prompt);
            return Ok(config.default.clone().unwrap_or_default());
        }
        Ok(answer.to_string())
    }
}
