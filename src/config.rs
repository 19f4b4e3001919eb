//! Scaffold configuration
//!
//! The two historical flavours of the scaffolder (a quick one that takes the
//! name from the command line and always installs, and an interactive one that
//! asks for both) are expressed as presets of [`ScaffoldConfig`].

use crate::constants::{
    APP_NAME, DEFAULT_PROJECT_NAME, INSTALL_COMMAND, START_COMMAND, TEMPLATE_URL,
};
use clap::ValueEnum;
use std::fmt::Display;

/// Where the project name comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectNameSource {
    /// Given on the command line.
    Argument(String),
    /// Asked interactively; an empty answer selects `default`.
    Prompt { default: String },
    /// Nothing given and prompting is disabled: use `default` and warn.
    Fallback { default: String },
}

/// Whether the dependency installation step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InstallPolicy {
    /// Always install.
    Always,
    /// Ask first; anything but `n` installs.
    Prompt,
    /// Never install.
    Never,
}

impl Display for InstallPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InstallPolicy::Always => "always",
            InstallPolicy::Prompt => "prompt",
            InstallPolicy::Never => "never",
        };
        write!(f, "{s}")
    }
}

/// Everything the scaffold workflow needs to know about one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub name_source: ProjectNameSource,
    pub install: InstallPolicy,
    pub template_url: String,
    pub install_command: Vec<String>,
    pub start_command: String,
    pub app_name: String,
}

impl ScaffoldConfig {
    /// Name from the argument (or the `bot` fallback), install unconditionally.
    pub fn quick(name: Option<String>) -> Self {
        let name_source = match name {
            Some(name) => ProjectNameSource::Argument(name),
            None => ProjectNameSource::Fallback { default: DEFAULT_PROJECT_NAME.to_string() },
        };
        Self { name_source, install: InstallPolicy::Always, ..Self::base() }
    }

    /// Name from the argument or a prompt, ask before installing.
    pub fn interactive(name: Option<String>) -> Self {
        let name_source = match name {
            Some(name) => ProjectNameSource::Argument(name),
            None => ProjectNameSource::Prompt { default: DEFAULT_PROJECT_NAME.to_string() },
        };
        Self { name_source, install: InstallPolicy::Prompt, ..Self::base() }
    }

    pub fn with_install(mut self, install: InstallPolicy) -> Self {
        self.install = install;
        self
    }

    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = url.into();
        self
    }

    fn base() -> Self {
        Self {
            name_source: ProjectNameSource::Fallback {
                default: DEFAULT_PROJECT_NAME.to_string(),
            },
            install: InstallPolicy::Always,
            template_url: TEMPLATE_URL.to_string(),
            install_command: INSTALL_COMMAND.iter().map(|c| c.to_string()).collect(),
            start_command: START_COMMAND.to_string(),
            app_name: APP_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_preset_falls_back_to_bot() {
        let config = ScaffoldConfig::quick(None);
        assert_eq!(config.name_source, ProjectNameSource::Fallback { default: "bot".into() });
        assert_eq!(config.install, InstallPolicy::Always);
        assert_eq!(config.template_url, TEMPLATE_URL);
        assert_eq!(config.install_command, vec!["npm", "install"]);
    }

    #[test]
    fn interactive_preset_prompts() {
        let config = ScaffoldConfig::interactive(None);
        assert_eq!(config.name_source, ProjectNameSource::Prompt { default: "bot".into() });
        assert_eq!(config.install, InstallPolicy::Prompt);
    }

    #[test]
    fn argument_wins_in_both_presets() {
        for config in [
            ScaffoldConfig::quick(Some("demo".into())),
            ScaffoldConfig::interactive(Some("demo".into())),
        ] {
            assert_eq!(config.name_source, ProjectNameSource::Argument("demo".into()));
        }
    }

    #[test]
    fn builders_override_fields() {
        let config = ScaffoldConfig::quick(None)
            .with_install(InstallPolicy::Never)
            .with_template_url("/tmp/template");
        assert_eq!(config.install, InstallPolicy::Never);
        assert_eq!(config.template_url, "/tmp/template");
        assert_eq!(config.install_command, vec!["npm", "install"]);
    }

    #[test]
    fn display_install_policy_variants() {
        assert_eq!(InstallPolicy::Always.to_string(), "always");
        assert_eq!(InstallPolicy::Prompt.to_string(), "prompt");
        assert_eq!(InstallPolicy::Never.to_string(), "never");
    }
}
