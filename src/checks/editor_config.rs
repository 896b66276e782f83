//! Editor MCP configuration check.

use std::fs;

use crate::config::{CheckerSettings, EditorConfigStatus, EDITOR_CONFIG_FILE};
use crate::ui::UserInterface;

use super::report_file;

/// Check that `.vscode/mcp.json` declares the `jira` MCP server.
///
/// Passes only when the file exists, is valid JSON, and contains an
/// `mcpServers` object with a `jira` entry. Every failure is reported
/// through the UI; nothing is raised.
pub fn check_editor_config(settings: &CheckerSettings, ui: &mut dyn UserInterface) -> bool {
    ui.show_section("🔧 Checking VS Code configuration...");

    let path = settings.editor_config();
    if !report_file(ui, &path, EDITOR_CONFIG_FILE, "MCP configuration") {
        return false;
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            ui.error(&format!("Error reading configuration: {}", e));
            return false;
        }
    };

    let status = EditorConfigStatus::from_json(&content);
    tracing::debug!("{} inspected: {:?}", path.display(), status);

    match status {
        EditorConfigStatus::Valid => {
            ui.success("Valid MCP configuration structure");
            ui.success("JIRA server configured");
            true
        }
        EditorConfigStatus::MissingJiraServer => {
            ui.success("Valid MCP configuration structure");
            ui.error("JIRA server not configured");
            false
        }
        EditorConfigStatus::MissingServers => {
            ui.error("Invalid MCP configuration structure");
            false
        }
        EditorConfigStatus::Malformed { message } => {
            ui.error(&format!("Invalid JSON in configuration: {}", message));
            false
        }
    }
}
