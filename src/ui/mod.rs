//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use mcp_jira::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("MCP-JIRA", "1.0.0");
//! ui.success("Docker available");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::confirm;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme, Tone};

use crate::checks::{CheckResult, NextStep};
use crate::error::Result;

/// Width of the banner and summary rules.
pub const RULE_WIDTH: usize = 60;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a passed item.
    fn success(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display a failed item.
    fn error(&mut self, msg: &str);

    /// Display a hint suggesting what to do next.
    fn show_hint(&mut self, hint: &str);

    /// Show the banner with tool title and version.
    fn show_header(&mut self, title: &str, version: &str);

    /// Announce the section for the next check.
    fn show_section(&mut self, title: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for a slow operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show the pass/fail table for every executed check and the verdict.
    ///
    /// Shown in every output mode.
    fn show_summary(&mut self, results: &[CheckResult]);

    /// Show numbered remediation steps. Shown in every output mode.
    fn show_next_steps(&mut self, steps: &[NextStep]);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Lines of the summary block, verdict included.
pub fn summary_lines(theme: &Theme, results: &[CheckResult]) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        theme.paint(Tone::Header, "📊 VERIFICATION SUMMARY"),
        theme.paint(Tone::Header, &"=".repeat(40)),
    ];

    for result in results {
        if result.passed {
            lines.push(theme.format_success(&result.name));
        } else {
            lines.push(theme.format_error(&result.name));
        }
    }

    lines.push(String::new());
    if results.iter().all(|r| r.passed) {
        lines.push(theme.paint(Tone::Success, "🎉 Configuration is fully valid!"));
        lines.push(theme.paint(Tone::Success, "🚀 The MCP-JIRA server is ready to use"));
    } else {
        lines.push(theme.paint(Tone::Warning, "⚠️  Some checks failed"));
    }
    lines
}

/// Lines of the next-steps block.
pub fn next_step_lines(theme: &Theme, steps: &[NextStep]) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        theme.paint(Tone::Header, "🚀 NEXT STEPS"),
        theme.paint(Tone::Header, &"=".repeat(40)),
    ];

    for step in steps {
        lines.push(String::new());
        lines.push(theme.paint(Tone::Warning, &step.heading()));
        for command in &step.commands {
            lines.push(theme.format_command(command));
        }
    }
    lines
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for scripted answers).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter or cannot be asked.
    pub default: bool,
}

impl Prompt {
    pub fn new(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            default,
        }
    }
}
