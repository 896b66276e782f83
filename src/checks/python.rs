//! Python interpreter, pip and dependency manifest check.

use regex::Regex;
use std::fs;
use std::sync::LazyLock;

use crate::config::{CheckerSettings, MANIFEST_FILE, SUPPORTED_PYTHON_VERSIONS};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid")
});

/// Extract `(major.minor, full)` from `python --version` output.
///
/// ```
/// use mcp_jira::checks::extract_version;
///
/// assert_eq!(
///     extract_version("Python 3.11.4"),
///     Some(("3.11".to_string(), "3.11.4".to_string()))
/// );
/// assert_eq!(extract_version("command not found"), None);
/// ```
pub fn extract_version(output: &str) -> Option<(String, String)> {
    let caps = VERSION_PATTERN.captures(output)?;
    let minor = format!("{}.{}", &caps[1], &caps[2]);
    Some((minor, caps[0].to_string()))
}

/// Number of dependency lines in a requirements manifest.
///
/// Blank lines and lines starting with `#` (after trimming) are ignored.
pub fn count_requirements(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}

/// Check the Python interpreter, pip, and `requirements.txt`.
///
/// Fails when the interpreter or pip cannot be run, or when the manifest
/// exists but cannot be read. An unsupported interpreter version and a
/// missing manifest are reported without failing.
pub fn check_python_environment(
    runner: &dyn CommandRunner,
    settings: &CheckerSettings,
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section("🐍 Checking Python environment...");

    let python = settings.python.as_str();
    let version_line = match runner.run(python, &["--version"]) {
        Ok(result) if result.success => result.first_line().unwrap_or_default().to_string(),
        Ok(_) | Err(_) => {
            ui.error(&format!("Python interpreter not available ({})", python));
            return false;
        }
    };

    match extract_version(&version_line) {
        Some((minor, full)) => {
            ui.success(&format!("Python {}", full));
            if !SUPPORTED_PYTHON_VERSIONS.contains(&minor.as_str()) {
                ui.warning(&format!(
                    "Python {} is not a tested version (supported: {})",
                    minor,
                    SUPPORTED_PYTHON_VERSIONS.join(", ")
                ));
            }
        }
        None => {
            tracing::debug!("Unrecognised version output: {:?}", version_line);
            ui.success(&format!("Python: {}", version_line));
        }
    }

    match runner.run(python, &["-m", "pip", "--version"]) {
        Ok(result) if result.success => ui.success("pip available"),
        Ok(_) | Err(_) => {
            ui.error("pip not available");
            return false;
        }
    }

    let manifest = settings.manifest();
    if !manifest.is_file() {
        ui.message(&format!("Dependency file: {} (not present)", MANIFEST_FILE));
        return true;
    }

    match fs::read_to_string(&manifest) {
        Ok(content) => {
            ui.success(&format!("Dependency file: {}", MANIFEST_FILE));
            ui.success(&format!(
                "{} dependencies listed",
                count_requirements(&content)
            ));
            true
        }
        Err(e) => {
            ui.error(&format!("Error reading dependencies: {}", e));
            false
        }
    }
}
