//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt answers.
//!
//! # Example
//!
//! ```
//! use mcp_jira::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("pull_image", true);
//!
//! ui.success("Docker available");
//! let pull = ui.confirm(&Prompt::new("pull_image", "Pull?", false)).unwrap();
//!
//! assert!(pull);
//! assert!(ui.has_success("Docker available"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::checks::{CheckResult, NextStep};
use crate::error::{McpJiraError, Result};

use super::{Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt answers.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    spinners: Vec<String>,
    spinner_finishes: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
    summaries: Vec<Vec<CheckResult>>,
    next_steps: Vec<Vec<NextStep>>,
    prompt_responses: HashMap<String, bool>,
    prompts_shown: Vec<String>,
    interrupt_prompts: bool,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for a prompt key.
    ///
    /// Unconfigured prompts are answered with their default.
    pub fn set_prompt_response(&mut self, key: &str, answer: bool) {
        self.prompt_responses.insert(key.to_string(), answer);
    }

    /// Make every prompt fail as if the user pressed Ctrl-C.
    pub fn interrupt_prompts(&mut self) {
        self.interrupt_prompts = true;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each spinner finished, in order.
    pub fn spinner_finishes(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_finishes.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Every summary table shown, in order.
    pub fn summaries(&self) -> &[Vec<CheckResult>] {
        &self.summaries
    }

    /// Every next-steps block shown, in order.
    pub fn next_steps(&self) -> &[Vec<NextStep>] {
        &self.next_steps
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a spinner finished with a matching error.
    pub fn has_spinner_error(&self, msg: &str) -> bool {
        self.spinner_finishes
            .borrow()
            .iter()
            .any(|(status, m)| *status == SpinnerStatus::Error && m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_header(&mut self, title: &str, _version: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.key.clone());

        if self.interrupt_prompts {
            return Err(McpJiraError::Io(std::io::Error::new(
                std::io::ErrorKind::Interrupted,
                "interrupted",
            )));
        }

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finishes: Rc::clone(&self.spinner_finishes),
        })
    }

    fn show_summary(&mut self, results: &[CheckResult]) {
        self.summaries.push(results.to_vec());
    }

    fn show_next_steps(&mut self, steps: &[NextStep]) {
        self.next_steps.push(steps.to_vec());
    }
}

/// Spinner handed out by [`MockUI`]; finishes are recorded on the UI.
struct MockSpinner {
    finishes: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
}

/// How a mock spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finishes
            .borrow_mut()
            .push((SpinnerStatus::Success, msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finishes
            .borrow_mut()
            .push((SpinnerStatus::Error, msg.to_string()));
    }
}
