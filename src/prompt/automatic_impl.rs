//! Prompt provider that answers without user interaction
//!
//! Used for `--non-interactive` runs and in tests.

use super::interface::{Prompter, TextPromptConfig};
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    asked: RefCell<Vec<String>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Prompts answered so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.asked.borrow_mut().push(config.prompt.clone());

        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        log::info!("Auto-answering prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}
