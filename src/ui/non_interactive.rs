//! Non-interactive UI for CI/headless environments.

use std::io::{self, Write};

use crate::checks::{CheckResult, NextStep};
use crate::error::Result;

use super::{
    next_step_lines, summary_lines, OutputMode, Prompt, SpinnerHandle, Theme, UserInterface,
    RULE_WIDTH,
};

/// Environment variable prefix for answering prompts without a terminal.
///
/// `MCP_JIRA_PROMPT_PULL_IMAGE=yes` answers the `pull_image` prompt.
pub const PROMPT_ENV_PREFIX: &str = "MCP_JIRA_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Output is plain text on stdout. Prompts are answered from
/// `MCP_JIRA_PROMPT_<KEY>` when set, otherwise with their default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: Theme,
    env_fn: fn(&str) -> Option<String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::plain(),
            env_fn: |key| std::env::var(key).ok(),
        }
    }

    /// Create with an explicit prompt-answer lookup (for testing).
    pub fn with_env(mode: OutputMode, env_fn: fn(&str) -> Option<String>) -> Self {
        Self {
            mode,
            theme: Theme::plain(),
            env_fn,
        }
    }
}

/// Interpret a yes/no answer typed by a human.
pub fn parse_answer(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "s" | "si" | "sí" => Some(true),
        "n" | "no" | "false" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Write one line to stdout, ignoring a closed or full stream.
fn print_line(text: &str) {
    writeln!(io::stdout().lock(), "{}", text).ok();
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            print_line(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            print_line(&self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            print_line(&self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        print_line(&self.theme.format_error(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            print_line(&self.theme.format_hint(hint));
        }
    }

    fn show_header(&mut self, title: &str, version: &str) {
        if self.mode.shows_status() {
            let rule = "=".repeat(RULE_WIDTH);
            print_line(&rule);
            print_line(&format!("🔍 {}", title));
            print_line(&format!("Version: {}", version));
            print_line(&rule);
            print_line("");
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            print_line("");
            print_line(title);
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = (self.env_fn)(&env_key)
            .and_then(|value| parse_answer(&value))
            .unwrap_or(prompt.default);

        if self.mode.shows_status() {
            print_line(&format!(
                "{} {}",
                prompt.question,
                if answer { "(yes)" } else { "(no)" }
            ));
        }
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            print_line(message);
        }
        Box::new(LineSpinner {
            theme: self.theme,
            show: self.mode.shows_status(),
        })
    }

    fn show_summary(&mut self, results: &[CheckResult]) {
        for line in summary_lines(&self.theme, results) {
            print_line(&line);
        }
    }

    fn show_next_steps(&mut self, steps: &[NextStep]) {
        for line in next_step_lines(&self.theme, steps) {
            print_line(&line);
        }
    }
}

/// Spinner that prints only its final line.
struct LineSpinner {
    theme: Theme,
    show: bool,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.show {
            print_line(&self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        print_line(&self.theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_key: &str) -> Option<String> {
        None
    }

    fn pull_yes(key: &str) -> Option<String> {
        (key == "MCP_JIRA_PROMPT_PULL_IMAGE").then(|| "yes".to_string())
    }

    fn pull_garbage(key: &str) -> Option<String> {
        (key == "MCP_JIRA_PROMPT_PULL_IMAGE").then(|| "maybe".to_string())
    }

    #[test]
    fn confirm_uses_default_without_override() {
        let mut ui = NonInteractiveUI::with_env(OutputMode::Quiet, no_env);
        assert!(!ui.confirm(&Prompt::new("pull_image", "Pull?", false)).unwrap());
        assert!(ui.confirm(&Prompt::new("pull_image", "Pull?", true)).unwrap());
    }

    #[test]
    fn confirm_uses_env_override() {
        let mut ui = NonInteractiveUI::with_env(OutputMode::Quiet, pull_yes);
        assert!(ui.confirm(&Prompt::new("pull_image", "Pull?", false)).unwrap());
    }

    #[test]
    fn unrecognised_override_falls_back_to_default() {
        let mut ui = NonInteractiveUI::with_env(OutputMode::Quiet, pull_garbage);
        assert!(!ui.confirm(&Prompt::new("pull_image", "Pull?", false)).unwrap());
    }

    #[test]
    fn parse_answer_accepts_english_and_spanish() {
        assert_eq!(parse_answer("Y"), Some(true));
        assert_eq!(parse_answer(" yes "), Some(true));
        assert_eq!(parse_answer("sí"), Some(true));
        assert_eq!(parse_answer("no"), Some(false));
        assert_eq!(parse_answer(""), Some(false));
        assert_eq!(parse_answer("later"), None);
    }
}
