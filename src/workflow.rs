//! The scaffold workflow: clone the template, strip its history, start a
//! fresh repository and install dependencies.
//!
//! Steps run strictly in sequence. A failure stops the workflow where it is;
//! nothing already created on disk is rolled back.

use crate::{
    config::{InstallPolicy, ProjectNameSource, ScaffoldConfig},
    error::Result,
    installer::Installer,
    ioutils::{ensure_absent, relative_project_path, remove_git_metadata, target_path},
    output::{Completion, Reporter},
    prompt::{ask_install, ask_project_name, Prompter},
    vcs::VersionControl,
};
use std::path::{Path, PathBuf};

/// One invocation's resolved project name and target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub name: String,
    pub target: PathBuf,
}

impl ScaffoldRequest {
    /// `name` is reduced to its path below `cwd`; a rooted name such as
    /// `/tmp/x` becomes `tmp/x`.
    pub fn new<P: AsRef<Path>>(cwd: P, name: &str) -> Result<Self> {
        let target = target_path(cwd, name)?;
        let name = relative_project_path(name)?.to_string_lossy().into_owned();
        Ok(Self { name, target })
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub request: ScaffoldRequest,
    pub installed: bool,
}

/// Progress texts of a single step.
struct Step {
    start: &'static str,
    success: &'static str,
    failure: &'static str,
}

const CLONE: Step = Step {
    start: "Cloning repository...",
    success: "Repository cloned successfully",
    failure: "Failed to clone repository",
};

const CLEANUP: Step = Step {
    start: "Cleaning up...",
    success: "Cleaned up successfully",
    failure: "Failed to clean up",
};

const INIT: Step = Step {
    start: "Initializing new git repository...",
    success: "New git repository initialized",
    failure: "Failed to initialize git repository",
};

const INSTALL: Step = Step {
    start: "Installing dependencies...",
    success: "Dependencies installed successfully",
    failure: "Failed to install dependencies",
};

/// Runs the scaffold workflow against the given collaborators.
pub struct Scaffolder<'a> {
    config: &'a ScaffoldConfig,
    vcs: &'a dyn VersionControl,
    installer: &'a dyn Installer,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        config: &'a ScaffoldConfig,
        vcs: &'a dyn VersionControl,
        installer: &'a dyn Installer,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self { config, vcs, installer, prompter, reporter }
    }

    /// Scaffolds a new project below `cwd`.
    pub fn run<P: AsRef<Path>>(&self, cwd: P) -> Result<ScaffoldOutcome> {
        self.reporter.banner();

        let name = self.resolve_name()?;
        let request = ScaffoldRequest::new(cwd, &name)?;
        log::debug!("Scaffolding '{}' into '{}'", request.name, request.target.display());

        self.reporter
            .info(&format!("Creating {} app in {}...\n", self.config.app_name, request.name));

        ensure_absent(&request.target, &request.name)?;

        self.step(&CLONE, || {
            self.vcs.clone_repository(&self.config.template_url, &request.target)
        })?;
        self.step(&CLEANUP, || remove_git_metadata(&request.target))?;
        self.step(&INIT, || self.vcs.init_repository(&request.target))?;

        let installed = if self.should_install()? {
            self.step(&INSTALL, || self.installer.install(&request.target))?;
            true
        } else {
            log::info!("Skipping `{}`", self.installer.describe());
            false
        };

        self.reporter.completed(&self.completion(&request, installed));

        Ok(ScaffoldOutcome { request, installed })
    }

    fn resolve_name(&self) -> Result<String> {
        match &self.config.name_source {
            ProjectNameSource::Argument(name) => Ok(name.clone()),
            ProjectNameSource::Prompt { default } => ask_project_name(self.prompter, default),
            ProjectNameSource::Fallback { default } => {
                self.reporter.warning(&format!(
                    "No folder name provided. Using default name \"{default}\"."
                ));
                Ok(default.clone())
            }
        }
    }

    fn should_install(&self) -> Result<bool> {
        match self.config.install {
            InstallPolicy::Always => Ok(true),
            InstallPolicy::Never => Ok(false),
            InstallPolicy::Prompt => ask_install(self.prompter),
        }
    }

    fn step<T>(&self, step: &Step, op: impl FnOnce() -> Result<T>) -> Result<T> {
        self.reporter.step_started(step.start);
        match op() {
            Ok(value) => {
                self.reporter.step_succeeded(step.success);
                Ok(value)
            }
            Err(e) => {
                log::debug!("{}: {e:?}", step.failure);
                self.reporter.step_failed(step.failure);
                Err(e)
            }
        }
    }

    fn completion(&self, request: &ScaffoldRequest, installed: bool) -> Completion {
        let mut next_steps = vec![format!("cd {}", request.name)];
        if !installed {
            next_steps.push(self.installer.describe());
        }
        next_steps.push(self.config.start_command.clone());

        Completion {
            headline: format!("{} app created successfully! 🎉", self.config.app_name),
            next_steps,
        }
    }
}
