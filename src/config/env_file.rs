//! .env file parsing.
//!
//! This module parses credential files in the standard `KEY=value` format
//! that the MCP-Atlassian server reads its JIRA connection settings from.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Lines without an `=` are ignored.
///
/// # Example
///
/// ```
/// use mcp_jira::config::EnvFileParser;
///
/// let content = r#"
/// # JIRA connection
/// JIRA_SERVER=https://acme.atlassian.net
/// JIRA_EMAIL="dev@acme.io"
/// JIRA_API_TOKEN=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("JIRA_SERVER"), Some(&"https://acme.atlassian.net".to_string()));
/// assert_eq!(vars.get("JIRA_EMAIL"), Some(&"dev@acme.io".to_string()));
/// assert_eq!(vars.get("JIRA_API_TOKEN"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Split a line on its first `=`.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        Some((key.trim().to_string(), Self::unquote(value.trim())))
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Self::parse(&content))
    }
}
