//! Container runtime and MCP-Atlassian image checks.

use crate::config::CheckerSettings;
use crate::error::McpJiraError;
use crate::shell::{CommandResult, CommandRunner};
use crate::ui::UserInterface;

/// Where to get Docker when the runtime is missing.
pub const DOCKER_INSTALL_URL: &str = "https://docs.docker.com/get-docker/";

/// Check that the container runtime answers `--version`.
pub fn check_runtime(
    runner: &dyn CommandRunner,
    settings: &CheckerSettings,
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section(&format!("🐳 Checking {}...", settings.runtime));

    match runner.run(&settings.runtime, &["--version"]) {
        Ok(result) if result.success => {
            let version = result.first_line().unwrap_or("unknown version");
            ui.success(&format!("{} available: {}", settings.runtime, version));
            true
        }
        Ok(result) => {
            tracing::debug!("{} --version exited with {:?}", settings.runtime, result.exit_code);
            report_runtime_missing(settings, ui);
            false
        }
        Err(e) => {
            tracing::debug!("{}", e);
            report_runtime_missing(settings, ui);
            false
        }
    }
}

fn report_runtime_missing(settings: &CheckerSettings, ui: &mut dyn UserInterface) {
    ui.error(&format!("{} not available", settings.runtime));
    ui.show_hint(&format!(
        "Install Docker to run the MCP-Atlassian server: {}",
        DOCKER_INSTALL_URL
    ));
}

/// Pull the MCP-Atlassian image to confirm it is reachable.
///
/// Long-running; callers only invoke it after the operator agreed.
pub fn check_image(
    runner: &dyn CommandRunner,
    settings: &CheckerSettings,
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section("📦 Checking MCP-Atlassian image...");

    let mut spinner = ui.start_spinner(&format!("Pulling {}...", settings.image));
    match runner.run(&settings.runtime, &["pull", settings.image.as_str()]) {
        Ok(result) if result.success => {
            spinner.finish_success("MCP-Atlassian image available");
            true
        }
        Ok(result) => {
            spinner.finish_error(&format!("Error pulling image: {}", pull_failure(&result)));
            false
        }
        Err(McpJiraError::CommandUnavailable { .. }) => {
            spinner.finish_error(&format!("{} not found", settings.runtime));
            false
        }
        Err(e) => {
            spinner.finish_error(&format!("Error checking image: {}", e));
            false
        }
    }
}

fn pull_failure(result: &CommandResult) -> String {
    let detail = result
        .stderr
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty());
    match (result.exit_code, detail) {
        (Some(code), Some(detail)) => format!("exit code {}: {}", code, detail),
        (Some(code), None) => format!("exit code {}", code),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => "terminated by signal".to_string(),
    }
}
