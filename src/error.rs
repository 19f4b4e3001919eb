use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The target path is taken. Raised before any side effect.
    #[error("Directory \"{name}\" already exists. Please choose a different name or delete the existing directory.")]
    DirectoryExists { name: String, path: String },

    #[error("Invalid project name \"{name}\": it must name a directory inside the current one.")]
    InvalidProjectName { name: String },

    #[error("Failed to clone repository '{url}'. Original error: {source}")]
    CloneFailed {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to install dependencies with `{command}`: {reason}")]
    InstallFailed { command: String, reason: String },

    #[error("{0}")]
    UnknownFailure(String),

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Convenience type alias for Results with the scaffolder's error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error banner to stderr and exits with the error's exit code
pub fn default_error_handler(err: Error) {
    log::debug!("{err:?}");
    crate::output::print_error(&err);
    std::process::exit(err.exit_code());
}
