//! mcp-jira - readiness checker for the MCP-JIRA integration.
//!
//! Verifies that a project directory is ready to run the `mcp-atlassian`
//! MCP server for JIRA: credentials in `.env`, the editor's MCP server
//! declaration, a container runtime, and the Python tooling. Prints a
//! pass/fail summary with remediation steps.
//!
//! # Modules
//!
//! - [`checks`] - Individual readiness checks and remediation steps
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings, `.env` parsing, editor configuration
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Checklist orchestration and the pull decision
//! - [`shell`] - External command execution and interrupt handling
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use mcp_jira::config::CheckerSettings;
//! use mcp_jira::runner::{ChecklistRunner, PullPolicy};
//! use mcp_jira::shell::MockRunner;
//! use mcp_jira::ui::MockUI;
//!
//! let settings = CheckerSettings::new("/nonexistent/project");
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let report = ChecklistRunner::new(&settings, &runner)
//!     .with_pull_policy(PullPolicy::Never)
//!     .run(&mut ui)
//!     .unwrap();
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{McpJiraError, Result};
