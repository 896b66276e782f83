//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. Each
//! command line is mapped to a canned outcome; every invocation is recorded
//! for later assertion. Command lines with no script behave as if the
//! program were not installed.
//!
//! # Example
//!
//! ```
//! use mcp_jira::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().succeeds("docker --version", "Docker version 24.0.7");
//!
//! let result = runner.run("docker", &["--version"]).unwrap();
//! assert!(result.success);
//! assert!(runner.run("podman", &["--version"]).is_err());
//! assert_eq!(runner.invocations(), vec!["docker --version", "podman --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{McpJiraError, Result};

use super::command::{display_command, CommandResult, CommandRunner};

/// A canned outcome for one command line.
#[derive(Debug, Clone)]
enum Scripted {
    Finished(CommandResult),
    Unavailable(String),
}

/// Command runner returning scripted outcomes.
#[derive(Debug, Default)]
pub struct MockRunner {
    scripts: HashMap<String, Scripted>,
    invocations: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful exit with the given stdout.
    pub fn succeeds(mut self, command: &str, stdout: &str) -> Self {
        self.scripts.insert(
            command.to_string(),
            Scripted::Finished(CommandResult::success(
                stdout.to_string(),
                String::new(),
                Duration::ZERO,
            )),
        );
        self
    }

    /// Script a non-zero exit with the given stderr.
    pub fn fails(mut self, command: &str, code: i32, stderr: &str) -> Self {
        self.scripts.insert(
            command.to_string(),
            Scripted::Finished(CommandResult::failure(
                Some(code),
                String::new(),
                stderr.to_string(),
                Duration::ZERO,
            )),
        );
        self
    }

    /// Script a command whose program cannot be started.
    pub fn unavailable(mut self, command: &str, message: &str) -> Self {
        self.scripts.insert(
            command.to_string(),
            Scripted::Unavailable(message.to_string()),
        );
        self
    }

    /// Script an arbitrary result.
    pub fn with_result(mut self, command: &str, result: CommandResult) -> Self {
        self.scripts
            .insert(command.to_string(), Scripted::Finished(result));
        self
    }

    /// Every command line run so far, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }

    /// Whether a command line was run.
    pub fn was_run(&self, command: &str) -> bool {
        self.invocations.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let command = display_command(program, args);
        self.invocations.borrow_mut().push(command.clone());

        match self.scripts.get(&command) {
            Some(Scripted::Finished(result)) => Ok(result.clone()),
            Some(Scripted::Unavailable(message)) => Err(McpJiraError::CommandUnavailable {
                command,
                message: message.clone(),
            }),
            None => Err(McpJiraError::CommandUnavailable {
                command,
                message: "not scripted".to_string(),
            }),
        }
    }
}
