//! Configuration inputs the checker reads.
//!
//! - Checker settings and package metadata in [`settings`]
//! - `.env` credential parsing in [`env_file`]
//! - Editor MCP server configuration in [`editor`]
//!
//! # Example
//!
//! ```
//! use mcp_jira::config::{EditorConfigStatus, EnvFileParser};
//!
//! let vars = EnvFileParser::parse("JIRA_SERVER=https://acme.atlassian.net");
//! assert_eq!(vars.len(), 1);
//!
//! let status = EditorConfigStatus::from_json(r#"{"mcpServers": {"jira": {}}}"#);
//! assert!(status.is_valid());
//! ```

pub mod editor;
pub mod env_file;
pub mod settings;

pub use editor::EditorConfigStatus;
pub use env_file::EnvFileParser;
pub use settings::{
    CheckerSettings, PackageInfo, DEFAULT_IMAGE, DEFAULT_JIRA_SERVER, DEFAULT_PYTHON,
    DEFAULT_RUNTIME, EDITOR_CONFIG_FILE, ENV_FILE, MANIFEST_FILE, REQUIRED_ENV_KEYS,
    SUPPORTED_PYTHON_VERSIONS,
};
