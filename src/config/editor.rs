//! Structural validation of the editor's MCP configuration.
//!
//! The editor reads `.vscode/mcp.json` to learn how to launch MCP servers.
//! The JIRA integration is usable only when that document declares an
//! `mcpServers` object with a `jira` entry.

use serde_json::Value;

/// Key holding the server table.
pub const SERVERS_KEY: &str = "mcpServers";

/// Server entry the integration needs.
pub const JIRA_SERVER_KEY: &str = "jira";

/// Outcome of inspecting an editor configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorConfigStatus {
    /// `mcpServers.jira` is declared.
    Valid,
    /// The document is not JSON.
    Malformed { message: String },
    /// `mcpServers` is missing or is not an object.
    MissingServers,
    /// `mcpServers` exists but has no `jira` entry.
    MissingJiraServer,
}

impl EditorConfigStatus {
    /// Parse and inspect raw file contents.
    pub fn from_json(content: &str) -> Self {
        match serde_json::from_str::<Value>(content) {
            Ok(doc) => Self::inspect(&doc),
            Err(e) => Self::Malformed {
                message: e.to_string(),
            },
        }
    }

    /// Inspect an already-parsed document.
    pub fn inspect(doc: &Value) -> Self {
        match doc.get(SERVERS_KEY).and_then(Value::as_object) {
            None => Self::MissingServers,
            Some(servers) if servers.contains_key(JIRA_SERVER_KEY) => Self::Valid,
            Some(_) => Self::MissingJiraServer,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}
