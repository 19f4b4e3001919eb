//! Terminal output: banner, step spinners and the final messages

use crate::error::Error;
use console::{style, Style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// "touchcli" in the figlet Standard font.
const BANNER_ART: &[&str] = &[
    r" _                   _          _ _ ",
    r"| |_ ___  _   _  ___| |__   ___| (_)",
    r"| __/ _ \| | | |/ __| '_ \ / __| | |",
    r"| || (_) | |_| | (__| | | | (__| | |",
    r" \__\___/ \__,_|\___|_| |_|\___|_|_|",
];

/// Pastel palette, one color per banner row.
const BANNER_COLORS: &[u8] = &[218, 183, 153, 117, 159];

/// Final message shown when the project is ready.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub headline: String,
    pub next_steps: Vec<String>,
}

/// Progress and status sink for the scaffold workflow.
pub trait Reporter {
    fn banner(&self);
    fn info(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn step_started(&self, msg: &str);
    fn step_succeeded(&self, msg: &str);
    fn step_failed(&self, msg: &str);
    fn completed(&self, completion: &Completion);
}

/// Banner rows with the pastel gradient applied.
pub fn banner_lines() -> Vec<StyledObject<&'static str>> {
    BANNER_ART
        .iter()
        .zip(BANNER_COLORS.iter().cycle())
        .map(|(row, color)| Style::new().color256(*color).apply_to(*row))
        .collect()
}

/// Lines of the error banner for `err`.
///
/// A taken target directory gets a single line; everything else is
/// introduced by an "An error occurred:" header.
pub fn error_lines(err: &Error) -> Vec<StyledObject<String>> {
    match err {
        Error::DirectoryExists { .. } => vec![style(format!("Error: {err}")).red()],
        _ => vec![
            style("An error occurred:".to_string()).red().bold(),
            style(err.to_string()).red(),
        ],
    }
}

/// Prints a workflow error the way the user sees it.
pub fn print_error(err: &Error) {
    if !matches!(err, Error::DirectoryExists { .. }) {
        eprintln!();
    }
    for line in error_lines(err) {
        eprintln!("{line}");
    }
}

/// Reporter drawing spinners and colored text on the terminal.
#[derive(Default)]
pub struct TerminalReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.borrow_mut().take()
    }
}

impl Reporter for TerminalReporter {
    fn banner(&self) {
        println!("\n");
        for line in banner_lines() {
            println!("{line}");
        }
        println!("\n");
    }

    fn info(&self, msg: &str) {
        println!("{}", style(msg).cyan());
    }

    fn warning(&self, msg: &str) {
        println!("{}", style(msg).yellow());
    }

    fn step_started(&self, msg: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        if let Some(previous) = self.spinner.borrow_mut().replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn step_succeeded(&self, msg: &str) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        println!("{} {}", style("✔").green(), msg);
    }

    fn step_failed(&self, msg: &str) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        eprintln!("{} {}", style("✖").red(), msg);
    }

    fn completed(&self, completion: &Completion) {
        println!("\n{}", style(&completion.headline).green().bold());
        println!("\n{}", style("To get started:").yellow().bold());
        for step in &completion.next_steps {
            println!("{}", style(format!("  {step}")).cyan());
        }
        println!("\n{}", style("Happy coding! 💻✨").magenta());
    }
}

/// Reporter that keeps every event in memory. Useful in tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events as `kind: message` strings.
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Everything recorded, joined by newlines.
    pub fn transcript(&self) -> String {
        self.events.borrow().join("\n")
    }

    fn record(&self, kind: &str, msg: &str) {
        self.events.borrow_mut().push(format!("{kind}: {msg}"));
    }
}

impl Reporter for RecordingReporter {
    fn banner(&self) {
        self.record("banner", crate::constants::BANNER_TITLE);
    }

    fn info(&self, msg: &str) {
        self.record("info", msg);
    }

    fn warning(&self, msg: &str) {
        self.record("warning", msg);
    }

    fn step_started(&self, msg: &str) {
        self.record("start", msg);
    }

    fn step_succeeded(&self, msg: &str) {
        self.record("success", msg);
    }

    fn step_failed(&self, msg: &str) {
        self.record("failed", msg);
    }

    fn completed(&self, completion: &Completion) {
        self.record("completed", &completion.headline);
        for step in &completion.next_steps {
            self.record("next", step);
        }
    }
}
