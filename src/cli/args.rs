use crate::config::{InstallPolicy, ScaffoldConfig};
use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for create-touchcli-app.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project directory to create. Asked for when omitted.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// When to install dependencies [default: prompt, or always with --non-interactive]
    #[arg(long, value_enum)]
    pub install: Option<InstallPolicy>,

    /// Never prompt: fall back to the default name and install without asking.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Maps the flags onto a scaffold configuration.
    pub fn to_config(&self) -> ScaffoldConfig {
        let name = self.project_name.clone();
        if self.non_interactive {
            let install = match self.install {
                Some(InstallPolicy::Never) => InstallPolicy::Never,
                _ => InstallPolicy::Always,
            };
            ScaffoldConfig::quick(name).with_install(install)
        } else {
            ScaffoldConfig::interactive(name)
                .with_install(self.install.unwrap_or(InstallPolicy::Prompt))
        }
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectNameSource;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["create-touchcli-app"]);
        assert_eq!(args.project_name, None);
        assert_eq!(args.install, None);
        assert!(!args.non_interactive);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "create-touchcli-app",
            "demo",
            "--install",
            "never",
            "--non-interactive",
            "-vv",
        ]);
        assert_eq!(args.project_name.as_deref(), Some("demo"));
        assert_eq!(args.install, Some(InstallPolicy::Never));
        assert!(args.non_interactive);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_install_policy() {
        assert!(Args::try_parse_from(["create-touchcli-app", "--install", "sometimes"]).is_err());
    }

    #[test]
    fn interactive_defaults_prompt_for_everything() {
        let config = Args::parse_from(["create-touchcli-app"]).to_config();
        assert_eq!(config.name_source, ProjectNameSource::Prompt { default: "bot".into() });
        assert_eq!(config.install, InstallPolicy::Prompt);
    }

    #[test]
    fn non_interactive_never_prompts() {
        let config =
            Args::parse_from(["create-touchcli-app", "--non-interactive"]).to_config();
        assert_eq!(config.name_source, ProjectNameSource::Fallback { default: "bot".into() });
        assert_eq!(config.install, InstallPolicy::Always);

        let config = Args::parse_from([
            "create-touchcli-app",
            "--non-interactive",
            "--install",
            "prompt",
        ])
        .to_config();
        assert_eq!(config.install, InstallPolicy::Always);

        let config = Args::parse_from([
            "create-touchcli-app",
            "--non-interactive",
            "--install",
            "never",
        ])
        .to_config();
        assert_eq!(config.install, InstallPolicy::Never);
    }

    #[test]
    fn explicit_install_policy_is_kept() {
        let config =
            Args::parse_from(["create-touchcli-app", "demo", "--install", "always"]).to_config();
        assert_eq!(config.name_source, ProjectNameSource::Argument("demo".into()));
        assert_eq!(config.install, InstallPolicy::Always);
    }
}
