//! Pure interfaces for prompting without external dependencies

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
}

/// Abstract interface for free-form text prompts
pub trait Prompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}
