//! Dialoguer-based implementation of the prompt interface

use super::interface::{Prompter, TextPromptConfig};
use super::line::LinePrompter;
use crate::error::Result;
use console::Term;
use dialoguer::Input;
use std::io::IsTerminal;

/// Terminal prompter reading answers from the user.
///
/// Without a terminal (piped or closed stdin, redirected stderr) answers are
/// read line by line from stdin instead.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let term = Term::stderr();
        if !term.is_term() || !std::io::stdin().is_terminal() {
            log::debug!("No terminal attached, reading '{}' from stdin", config.prompt);
            return LinePrompter::new(std::io::stdin().lock())
                .with_echo(term)
                .prompt_text(config);
        }

        let mut input = Input::<String>::new().with_prompt(&config.prompt).allow_empty(true);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        Ok(input.interact_text()?)
    }
}
