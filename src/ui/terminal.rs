//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::checks::{CheckResult, NextStep};
use crate::error::Result;

use super::{
    confirm, next_step_lines, summary_lines, NonInteractiveUI, OutputMode, ProgressSpinner,
    Prompt, SpinnerHandle, Theme, Tone, UserInterface, RULE_WIDTH,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: Theme::detect(),
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.line(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_success(msg);
            self.line(&text);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_warning(msg);
            self.line(&text);
        }
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_hint(hint);
            self.line(&text);
        }
    }

    fn show_header(&mut self, title: &str, version: &str) {
        if self.mode.shows_status() {
            let rule = self.theme.format_rule(RULE_WIDTH);
            let title = self.theme.paint(Tone::Header, &format!("🔍 {}", title));
            let version = self.theme.paint(Tone::Header, &format!("Version: {}", version));
            self.line(&rule);
            self.line(&title);
            self.line(&version);
            self.line(&rule);
            self.line("");
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_section(title);
            self.line("");
            self.line(&text);
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        confirm(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_summary(&mut self, results: &[CheckResult]) {
        for line in summary_lines(&self.theme, results) {
            self.line(&line);
        }
    }

    fn show_next_steps(&mut self, steps: &[NextStep]) {
        for line in next_step_lines(&self.theme, steps) {
            self.line(&line);
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.mode, OutputMode::Quiet);
    }

    #[test]
    fn create_ui_non_interactive_accepts_output() {
        let mut ui = create_ui(false, OutputMode::Quiet);
        ui.success("Docker available");
        ui.show_summary(&[CheckResult::new("Python environment", true)]);
    }
}
