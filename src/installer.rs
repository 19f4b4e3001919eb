use std::path::Path;
use std::process::{Command, Stdio};

use crate::constants::INSTALL_COMMAND;
use crate::error::{Error, Result};

/// Installs the dependencies of a freshly scaffolded project.
pub trait Installer {
    fn install(&self, project_dir: &Path) -> Result<()>;

    /// Human readable command line, used in messages.
    fn describe(&self) -> String;
}

/// Runs an external package-manager command inside the project directory.
///
/// # Notes
/// - stdin, stdout and stderr are discarded
/// - A non-zero exit status is reported as [`Error::InstallFailed`]
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    /// Builds an installer from a command line. The first element is the program.
    pub fn new<S: AsRef<str>>(command: &[S]) -> Result<Self> {
        let (program, args) = command.split_first().ok_or_else(|| {
            Error::UnknownFailure("Install command must not be empty".to_string())
        })?;
        Ok(Self {
            program: program.as_ref().to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        })
    }

    /// `npm install`
    pub fn npm() -> Self {
        Self {
            program: INSTALL_COMMAND[0].to_string(),
            args: INSTALL_COMMAND[1..].iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Installer for CommandInstaller {
    fn install(&self, project_dir: &Path) -> Result<()> {
        let command_line = self.describe();
        log::debug!("Running `{command_line}` in '{}'", project_dir.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::InstallFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::InstallFailed { command: command_line, reason: status.to_string() });
        }

        Ok(())
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
