//! External command execution.
//!
//! Checks never spawn processes directly: they go through a
//! [`CommandRunner`], so tests can substitute scripted outcomes
//! (see [`super::MockRunner`]).

use crate::error::{McpJiraError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// First non-empty line of stdout, falling back to stderr.
    ///
    /// Some tools (older Pythons among them) print their version on stderr.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout
            .lines()
            .chain(self.stderr.lines())
            .map(str::trim)
            .find(|l| !l.is_empty())
    }
}

/// Capability to run an external program and capture its output.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `Ok` with a failed [`CommandResult`] for a non-zero exit and
    /// [`McpJiraError::CommandUnavailable`] when the program cannot be
    /// started (not installed, not executable).
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult>;
}

/// Render a program and its arguments for display.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs real processes with captured stdout/stderr and no timeout.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands from the given working directory.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let start = Instant::now();
        let command = display_command(program, args);
        tracing::debug!("Running `{}`", command);

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd
            .output()
            .map_err(|e| McpJiraError::CommandUnavailable {
                command: command.clone(),
                message: e.to_string(),
            })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "`{}` exited with {:?} after {:?}",
            command,
            output.status.code(),
            duration
        );

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_command_joins_args() {
        assert_eq!(
            display_command("docker", &["pull", "img:latest"]),
            "docker pull img:latest"
        );
        assert_eq!(display_command("docker", &[]), "docker");
    }

    #[test]
    fn first_line_prefers_stdout() {
        let result = CommandResult::success(
            "\nDocker version 24.0.7\nmore".into(),
            "warning".into(),
            Duration::ZERO,
        );
        assert_eq!(result.first_line(), Some("Docker version 24.0.7"));
    }

    #[test]
    fn first_line_falls_back_to_stderr() {
        let result = CommandResult::success(String::new(), "Python 2.7.18\n".into(), Duration::ZERO);
        assert_eq!(result.first_line(), Some("Python 2.7.18"));
    }

    #[test]
    fn first_line_of_empty_output_is_none() {
        let result = CommandResult::failure(Some(1), "  \n".into(), String::new(), Duration::ZERO);
        assert_eq!(result.first_line(), None);
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout() {
        let result = SystemRunner::new().run("sh", &["-c", "echo hello"]).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_non_zero_exit() {
        let result = SystemRunner::new()
            .run("sh", &["-c", "echo boom >&2; exit 3"])
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("boom"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_uses_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();

        let result = SystemRunner::with_cwd(temp.path())
            .run("ls", &[])
            .unwrap();

        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn system_runner_missing_program_is_unavailable() {
        let err = SystemRunner::new()
            .run("mcp-jira-definitely-not-installed", &["--version"])
            .unwrap_err();

        assert!(matches!(err, McpJiraError::CommandUnavailable { .. }));
        assert!(err.to_string().contains("mcp-jira-definitely-not-installed --version"));
    }
}
