use crate::{
    cli::Args,
    error::Result,
    installer::CommandInstaller,
    output::TerminalReporter,
    prompt::{AutomaticPrompter, DialoguerPrompter, Prompter},
    vcs::GitClient,
    workflow::{ScaffoldOutcome, Scaffolder},
};

/// Main CLI runner: builds the collaborators for one invocation and runs the workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Scaffolds the project into the current working directory
    pub fn run(self) -> Result<ScaffoldOutcome> {
        let config = self.args.to_config();
        log::debug!("Using configuration: {config:?}");

        let cwd = std::env::current_dir()?;
        let vcs = GitClient::new();
        let installer = CommandInstaller::new(&config.install_command)?;
        let reporter = TerminalReporter::new();
        let prompter = self.prompter();

        Scaffolder::new(&config, &vcs, &installer, prompter.as_ref(), &reporter).run(cwd)
    }

    fn prompter(&self) -> Box<dyn Prompter> {
        if self.args.non_interactive {
            Box::new(AutomaticPrompter::new())
        } else {
            Box::new(DialoguerPrompter::new())
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<ScaffoldOutcome> {
    let runner = Runner::new(args);
    runner.run()
}
