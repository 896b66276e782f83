//! Readiness checks.
//!
//! Each check is an independent, stateless read-and-report operation: it
//! looks at one prerequisite, writes report lines through the
//! [`UserInterface`](crate::ui::UserInterface), and yields a pass/fail
//! outcome. A failing check never aborts the checks after it.
//!
//! # Modules
//!
//! - [`env_file`] - `.env` credentials
//! - [`editor_config`] - `.vscode/mcp.json` server declaration
//! - [`container`] - container runtime and image availability
//! - [`python`] - interpreter, pip and dependency manifest
//! - [`remediation`] - next steps shown after failures

pub mod container;
pub mod editor_config;
pub mod env_file;
pub mod python;
pub mod remediation;

pub use container::{check_image, check_runtime};
pub use editor_config::check_editor_config;
pub use env_file::{check_env_file, EnvCheck};
pub use python::{check_python_environment, count_requirements, extract_version};
pub use remediation::{next_steps, NextStep};

use std::path::Path;

use crate::ui::UserInterface;

/// Summary label for the `.env` check.
pub const ENVIRONMENT_CHECK: &str = "Environment configuration";
/// Summary label for the editor configuration check.
pub const EDITOR_CHECK: &str = "VS Code configuration";
/// Summary label for the container runtime check.
pub const RUNTIME_CHECK: &str = "Container runtime available";
/// Summary label for the Python check.
pub const PYTHON_CHECK: &str = "Python environment";
/// Summary label for the optional image check.
pub const IMAGE_CHECK: &str = "MCP-Atlassian image";

/// Outcome of one executed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Label shown in the summary.
    pub name: String,
    /// Whether the prerequisite is met.
    pub passed: bool,
}

impl CheckResult {
    pub fn new(name: &str, passed: bool) -> Self {
        Self {
            name: name.to_string(),
            passed,
        }
    }
}

/// Report whether a file exists, labelled with its project-relative name.
fn report_file(ui: &mut dyn UserInterface, path: &Path, label: &str, description: &str) -> bool {
    if path.is_file() {
        ui.success(&format!("{}: {}", description, label));
        true
    } else {
        ui.error(&format!("{}: {} (NOT FOUND)", description, label));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn check_result_creation() {
        let result = CheckResult::new(PYTHON_CHECK, true);
        assert_eq!(result.name, "Python environment");
        assert!(result.passed);
    }

    #[test]
    fn report_file_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "").unwrap();
        let mut ui = MockUI::new();

        assert!(report_file(&mut ui, &path, ".env", "Configuration file"));
        assert!(ui.has_success("Configuration file: .env"));
    }

    #[test]
    fn report_file_missing() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        assert!(!report_file(
            &mut ui,
            &temp.path().join(".env"),
            ".env",
            "Configuration file"
        ));
        assert!(ui.has_error(".env (NOT FOUND)"));
    }

    #[test]
    fn directories_are_not_files() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        assert!(!report_file(&mut ui, temp.path(), ".env", "Configuration file"));
    }
}
