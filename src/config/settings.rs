//! Resolved checker settings and package metadata.

use std::path::{Path, PathBuf};

/// Container image run by the editor to serve the JIRA integration.
pub const DEFAULT_IMAGE: &str = "ghcr.io/sooperset/mcp-atlassian:latest";

/// Placeholder JIRA endpoint written by the configure script.
pub const DEFAULT_JIRA_SERVER: &str = "https://your-domain.atlassian.net";

/// Container runtime queried by default.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Python interpreter queried by default.
pub const DEFAULT_PYTHON: &str = "python3";

/// Credentials the server cannot start without.
pub const REQUIRED_ENV_KEYS: [&str; 3] = ["JIRA_SERVER", "JIRA_EMAIL", "JIRA_API_TOKEN"];

/// Python minor versions the client tooling is tested against.
pub const SUPPORTED_PYTHON_VERSIONS: [&str; 5] = ["3.8", "3.9", "3.10", "3.11", "3.12"];

pub const ENV_FILE: &str = ".env";
pub const EDITOR_CONFIG_FILE: &str = ".vscode/mcp.json";
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Static description of this package, shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

impl PackageInfo {
    /// Metadata for the running binary.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: "Model Context Protocol (MCP) integration with JIRA",
            url: env!("CARGO_PKG_REPOSITORY"),
        }
    }
}

/// Everything a checklist run needs to know about where to look.
///
/// # Example
///
/// ```
/// use mcp_jira::config::CheckerSettings;
///
/// let settings = CheckerSettings::new("/work/project").with_runtime("podman");
/// assert_eq!(settings.runtime, "podman");
/// assert!(settings.env_file().ends_with(".env"));
/// ```
#[derive(Debug, Clone)]
pub struct CheckerSettings {
    /// Directory the relative config paths are resolved against.
    pub project_root: PathBuf,
    /// Container runtime CLI (`docker`, `podman`, ...).
    pub runtime: String,
    /// Image reference pulled by the optional image check.
    pub image: String,
    /// Python interpreter command.
    pub python: String,
}

impl CheckerSettings {
    /// Settings with all defaults, rooted at `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            runtime: DEFAULT_RUNTIME.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            python: DEFAULT_PYTHON.to_string(),
        }
    }

    pub fn with_runtime(mut self, runtime: &str) -> Self {
        self.runtime = runtime.to_string();
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    pub fn with_python(mut self, python: &str) -> Self {
        self.python = python.to_string();
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path of the credentials file.
    pub fn env_file(&self) -> PathBuf {
        self.project_root.join(ENV_FILE)
    }

    /// Path of the editor's MCP server configuration.
    pub fn editor_config(&self) -> PathBuf {
        self.project_root.join(EDITOR_CONFIG_FILE)
    }

    /// Path of the Python dependency manifest.
    pub fn manifest(&self) -> PathBuf {
        self.project_root.join(MANIFEST_FILE)
    }
}
