/// Handles argument parsing.
pub mod cli;

/// Scaffold configuration and its presets.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Dependency installation step.
pub mod installer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Banner, spinners and status messages.
pub mod output;

/// User input and interaction handling.
pub mod prompt;

/// Version-control client used to clone and initialize repositories.
pub mod vcs;

/// The scaffold workflow.
pub mod workflow;
