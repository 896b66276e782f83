//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{CheckerSettings, DEFAULT_IMAGE, DEFAULT_PYTHON, DEFAULT_RUNTIME};
use crate::runner::PullPolicy;
use crate::ui::OutputMode;

/// Verify that a project is ready to run the MCP-JIRA server.
#[derive(Debug, Parser)]
#[command(name = "mcp-jira")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "MCP_JIRA_PROJECT")]
    pub project: Option<PathBuf>,

    /// Container runtime command
    #[arg(long, env = "MCP_JIRA_RUNTIME", default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// MCP-Atlassian image to pull
    #[arg(long, env = "MCP_JIRA_IMAGE", default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Python interpreter command
    #[arg(long, env = "MCP_JIRA_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Pull the image without asking
    #[arg(long, conflicts_with = "no_pull")]
    pub pull: bool,

    /// Skip the image pull without asking
    #[arg(long)]
    pub no_pull: bool,

    /// Only show errors and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    pub fn pull_policy(&self) -> PullPolicy {
        PullPolicy::from_flags(self.pull, self.no_pull)
    }

    /// Resolve settings against `cwd` when no project is given.
    pub fn settings(&self, cwd: PathBuf) -> CheckerSettings {
        CheckerSettings::new(self.project.clone().unwrap_or(cwd))
            .with_runtime(&self.runtime)
            .with_image(&self.image)
            .with_python(&self.python)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mcp-jira").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = parse(&[]);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
        assert_eq!(cli.pull_policy(), PullPolicy::Ask);

        let settings = cli.settings(PathBuf::from("/work"));
        assert_eq!(settings.project_root(), PathBuf::from("/work"));
        assert_eq!(settings.image, DEFAULT_IMAGE);
    }

    #[test]
    fn overrides_reach_settings() {
        let cli = parse(&[
            "--project",
            "/srv/app",
            "--runtime",
            "podman",
            "--image",
            "registry.local/mcp:1",
            "--python",
            "python3.12",
            "-q",
        ]);
        let settings = cli.settings(PathBuf::from("/work"));

        assert_eq!(settings.project_root(), PathBuf::from("/srv/app"));
        assert_eq!(settings.runtime, "podman");
        assert_eq!(settings.image, "registry.local/mcp:1");
        assert_eq!(settings.python, "python3.12");
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn pull_flags() {
        assert_eq!(parse(&["--pull"]).pull_policy(), PullPolicy::Always);
        assert_eq!(parse(&["--no-pull"]).pull_policy(), PullPolicy::Never);
    }

    #[test]
    fn pull_flags_conflict() {
        assert!(Cli::try_parse_from(["mcp-jira", "--pull", "--no-pull"]).is_err());
    }
}
