//! User input for the scaffold workflow
//!
//! The module is structured in layers:
//! - `interface`: abstract prompt interface independent of any UI library
//! - `dialoguer`: terminal implementation using the dialoguer library
//! - `line`: line-by-line answers when no terminal is attached
//! - `automatic_impl`: scripted answers for non-interactive runs and tests

use crate::{constants::prompts, error::Result};

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;
pub mod line;

pub use self::automatic_impl::AutomaticPrompter;
pub use self::dialoguer::DialoguerPrompter;
pub use self::interface::*;
pub use self::line::LinePrompter;

/// Asks for the project name. An empty answer selects `default`.
pub fn ask_project_name(prompter: &dyn Prompter, default: &str) -> Result<String> {
    let config = TextPromptConfig { prompt: prompts::PROJECT_NAME.to_string(), default: None };
    let answer = prompter.prompt_text(&config)?;
    let answer = answer.trim();

    if answer.is_empty() {
        log::debug!("Empty project name, using default '{default}'");
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Asks whether dependencies should be installed.
pub fn ask_install(prompter: &dyn Prompter) -> Result<bool> {
    let config =
        TextPromptConfig { prompt: prompts::INSTALL_DEPENDENCIES.to_string(), default: None };
    Ok(is_affirmative(&prompter.prompt_text(&config)?))
}

/// Every answer except a case-insensitive `n` counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}
