//! The readiness checklist.

use crate::checks::{
    check_editor_config, check_env_file, check_image, check_python_environment, check_runtime,
    next_steps, CheckResult, EnvCheck, NextStep, EDITOR_CHECK, ENVIRONMENT_CHECK, IMAGE_CHECK,
    PYTHON_CHECK, RUNTIME_CHECK,
};
use crate::config::{CheckerSettings, PackageInfo};
use crate::error::{McpJiraError, Result};
use crate::shell::{interrupt, CommandRunner};
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the image pull question.
pub const PULL_PROMPT_KEY: &str = "pull_image";

/// Whether to run the slow image pull.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PullPolicy {
    /// Ask the operator, defaulting to no.
    #[default]
    Ask,
    Always,
    Never,
}

impl PullPolicy {
    /// Policy selected by the `--pull` / `--no-pull` flags.
    pub fn from_flags(pull: bool, no_pull: bool) -> Self {
        match (pull, no_pull) {
            (true, _) => Self::Always,
            (_, true) => Self::Never,
            _ => Self::Ask,
        }
    }

    /// Resolve the policy into a yes/no, prompting if needed.
    pub fn decide(self, ui: &mut dyn UserInterface) -> Result<bool> {
        match self {
            Self::Always => Ok(true),
            Self::Never => Ok(false),
            Self::Ask => {
                ui.message("");
                ui.confirm(&Prompt::new(
                    PULL_PROMPT_KEY,
                    "Check MCP-Atlassian image availability? (may take a while)",
                    false,
                ))
            }
        }
    }
}

/// Runs every check in order and renders the verdict.
pub struct ChecklistRunner<'a> {
    settings: &'a CheckerSettings,
    runner: &'a dyn CommandRunner,
    pull: PullPolicy,
    interrupted: fn() -> bool,
}

/// Outcome of a full checklist run.
#[derive(Debug, Clone)]
pub struct ChecklistReport {
    /// One entry per executed check, in execution order.
    pub results: Vec<CheckResult>,
    /// What the `.env` check found.
    pub env: EnvCheck,
    pub runtime_available: bool,
}

impl ChecklistReport {
    /// Whether every executed check passed.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Process exit status: 0 when every executed check passed, else 1.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Remediation tailored to what failed.
    pub fn next_steps(&self) -> Vec<NextStep> {
        next_steps(self.env.is_configured(), self.runtime_available)
    }

    /// Result for a summary label, if that check ran.
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

impl<'a> ChecklistRunner<'a> {
    pub fn new(settings: &'a CheckerSettings, runner: &'a dyn CommandRunner) -> Self {
        Self {
            settings,
            runner,
            pull: PullPolicy::default(),
            interrupted: interrupt::was_interrupted,
        }
    }

    pub fn with_pull_policy(mut self, pull: PullPolicy) -> Self {
        self.pull = pull;
        self
    }

    /// Replace the interrupt check consulted between checks.
    pub fn with_interrupt_check(mut self, interrupted: fn() -> bool) -> Self {
        self.interrupted = interrupted;
        self
    }

    fn checkpoint(&self) -> Result<()> {
        if (self.interrupted)() {
            tracing::debug!("Interrupt received, stopping checklist");
            return Err(McpJiraError::Interrupted);
        }
        Ok(())
    }

    /// Run the checklist.
    ///
    /// Check failures are part of the report; only an interrupt or a
    /// broken prompt returns an error.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<ChecklistReport> {
        let info = PackageInfo::current();
        ui.show_header("MCP-JIRA configuration check", &info.version);
        ui.message(&format!("📦 {}", info.description));
        ui.message(&format!("🔗 {}", info.url));
        tracing::debug!(
            "{} {} checking project at {}",
            info.name,
            info.version,
            self.settings.project_root().display()
        );

        let env = check_env_file(self.settings, ui);
        self.checkpoint()?;

        let editor_ok = check_editor_config(self.settings, ui);
        self.checkpoint()?;

        let runtime_available = check_runtime(self.runner, self.settings, ui);
        self.checkpoint()?;

        let python_ok = check_python_environment(self.runner, self.settings, ui);
        self.checkpoint()?;

        let mut results = vec![
            CheckResult::new(ENVIRONMENT_CHECK, env.is_configured()),
            CheckResult::new(EDITOR_CHECK, editor_ok),
            CheckResult::new(RUNTIME_CHECK, runtime_available),
            CheckResult::new(PYTHON_CHECK, python_ok),
        ];

        if self.pull.decide(ui)? {
            let image_ok = check_image(self.runner, self.settings, ui);
            self.checkpoint()?;
            results.push(CheckResult::new(IMAGE_CHECK, image_ok));
        } else {
            tracing::debug!("Image pull skipped");
        }

        let report = ChecklistReport {
            results,
            env,
            runtime_available,
        };

        ui.show_summary(&report.results);
        if !report.all_passed() {
            ui.show_next_steps(&report.next_steps());
        }
        tracing::debug!(
            "Checklist finished: {} of {} passed",
            report.results.iter().filter(|r| r.passed).count(),
            report.results.len()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const PULL: &str = "docker pull ghcr.io/sooperset/mcp-atlassian:latest";

    fn ready_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".env"),
            "JIRA_SERVER=https://acme.atlassian.net\nJIRA_EMAIL=dev@acme.io\nJIRA_API_TOKEN=t0ken\n",
        )
        .unwrap();
        fs::create_dir(temp.path().join(".vscode")).unwrap();
        fs::write(
            temp.path().join(".vscode/mcp.json"),
            r#"{"mcpServers": {"jira": {"command": "docker"}}}"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("requirements.txt"),
            "mcp-atlassian\nrequests\npython-dotenv\nhttpx\npydantic\n# pinned\n# dev\n\n",
        )
        .unwrap();
        temp
    }

    fn healthy_runner() -> MockRunner {
        MockRunner::new()
            .succeeds("docker --version", "Docker version 24.0.7, build afdd53b")
            .succeeds("python3 --version", "Python 3.11.4")
            .succeeds("python3 -m pip --version", "pip 23.2.1")
            .succeeds(PULL, "Status: Image is up to date")
    }

    fn never_interrupted() -> bool {
        false
    }

    fn always_interrupted() -> bool {
        true
    }

    fn run(
        settings: &CheckerSettings,
        runner: &MockRunner,
        pull: PullPolicy,
        ui: &mut MockUI,
    ) -> Result<ChecklistReport> {
        ChecklistRunner::new(settings, runner)
            .with_pull_policy(pull)
            .with_interrupt_check(never_interrupted)
            .run(ui)
    }

    fn names(report: &ChecklistReport) -> Vec<&str> {
        report.results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn ready_project_passes() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let report = run(&settings, &runner, PullPolicy::Never, &mut ui).unwrap();

        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            names(&report),
            vec![
                "Environment configuration",
                "VS Code configuration",
                "Container runtime available",
                "Python environment",
            ]
        );
        assert!(ui.has_success("5 dependencies listed"));
        assert_eq!(ui.summaries().len(), 1);
        assert!(ui.next_steps().is_empty());
    }

    #[test]
    fn banner_shows_package_info() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let mut ui = MockUI::new();

        run(&settings, &healthy_runner(), PullPolicy::Never, &mut ui).unwrap();

        assert_eq!(ui.headers(), &["MCP-JIRA configuration check"]);
        assert!(ui.has_message("Model Context Protocol"));
        assert!(ui.has_message("🔗 "));
    }

    #[test]
    fn declined_pull_issues_no_command() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner();
        let mut ui = MockUI::new();
        ui.set_prompt_response(PULL_PROMPT_KEY, false);

        let report = run(&settings, &runner, PullPolicy::Ask, &mut ui).unwrap();

        assert_eq!(ui.prompts_shown(), &[PULL_PROMPT_KEY]);
        assert!(!runner.was_run(PULL));
        assert!(report.result(IMAGE_CHECK).is_none());
        assert!(report.all_passed());
    }

    #[test]
    fn unanswered_prompt_defaults_to_no() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        run(&settings, &runner, PullPolicy::Ask, &mut ui).unwrap();

        assert!(!runner.was_run(PULL));
    }

    #[test]
    fn accepted_pull_is_last_in_summary() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner();
        let mut ui = MockUI::new();
        ui.set_prompt_response(PULL_PROMPT_KEY, true);

        let report = run(&settings, &runner, PullPolicy::Ask, &mut ui).unwrap();

        assert_eq!(names(&report).last(), Some(&"MCP-Atlassian image"));
        assert_eq!(runner.invocations().last().map(String::as_str), Some(PULL));
        assert!(report.all_passed());
    }

    #[test]
    fn failed_pull_fails_the_run() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner().fails(PULL, 1, "Error response from daemon: denied");
        let mut ui = MockUI::new();

        let report = run(&settings, &runner, PullPolicy::Always, &mut ui).unwrap();

        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(ui.next_steps().len(), 1);
    }

    #[test]
    fn empty_project_without_tools() {
        let temp = TempDir::new().unwrap();
        let settings = CheckerSettings::new(temp.path());
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let report = run(&settings, &runner, PullPolicy::Never, &mut ui).unwrap();

        assert!(report.results.iter().all(|r| !r.passed));
        assert_eq!(report.exit_code(), 1);

        let steps = &ui.next_steps()[0];
        assert_eq!(steps[0].heading(), "1. Configure environment variables:");
        assert_eq!(steps[1].heading(), "2. Install Docker:");
    }

    #[test]
    fn remediation_skips_steps_that_passed() {
        let temp = ready_project();
        fs::remove_file(temp.path().join(".vscode/mcp.json")).unwrap();
        let settings = CheckerSettings::new(temp.path());
        let mut ui = MockUI::new();

        let report = run(&settings, &healthy_runner(), PullPolicy::Never, &mut ui).unwrap();

        assert!(!report.result(EDITOR_CHECK).unwrap().passed);
        let steps = &ui.next_steps()[0];
        assert!(!steps.iter().any(|s| s.title.contains("environment")));
        assert!(!steps.iter().any(|s| s.title.contains("Docker")));
        assert_eq!(steps[0].heading(), "1. Install Python dependencies:");
    }

    #[test]
    fn one_failure_does_not_stop_later_checks() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = MockRunner::new()
            .unavailable("docker --version", "No such file or directory")
            .succeeds("python3 --version", "Python 3.11.4")
            .succeeds("python3 -m pip --version", "pip 23.2.1");
        let mut ui = MockUI::new();

        let report = run(&settings, &runner, PullPolicy::Never, &mut ui).unwrap();

        assert!(!report.result(RUNTIME_CHECK).unwrap().passed);
        assert!(report.result(PYTHON_CHECK).unwrap().passed);
        assert!(runner.was_run("python3 -m pip --version"));
    }

    // The environment entry requires every credential, not merely a
    // non-empty `.env`.
    #[test]
    fn environment_entry_requires_all_credentials() {
        let temp = ready_project();
        fs::write(
            temp.path().join(".env"),
            "JIRA_SERVER=https://acme.atlassian.net\nJIRA_EMAIL=dev@acme.io\n",
        )
        .unwrap();
        let settings = CheckerSettings::new(temp.path());
        let mut ui = MockUI::new();

        let report = run(&settings, &healthy_runner(), PullPolicy::Never, &mut ui).unwrap();

        assert!(!report.env.is_empty());
        assert!(!report.result(ENVIRONMENT_CHECK).unwrap().passed);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            ui.next_steps()[0][0].heading(),
            "1. Configure environment variables:"
        );
    }

    #[test]
    fn interrupt_stops_before_next_check() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let err = ChecklistRunner::new(&settings, &runner)
            .with_pull_policy(PullPolicy::Always)
            .with_interrupt_check(always_interrupted)
            .run(&mut ui)
            .unwrap_err();

        assert!(err.is_interrupt());
        assert!(runner.invocations().is_empty());
        assert!(ui.summaries().is_empty());
    }

    #[test]
    fn interrupted_prompt_aborts() {
        let temp = ready_project();
        let settings = CheckerSettings::new(temp.path());
        let runner = healthy_runner();
        let mut ui = MockUI::new();
        ui.interrupt_prompts();

        let err = run(&settings, &runner, PullPolicy::Ask, &mut ui).unwrap_err();

        assert!(err.is_interrupt());
        assert!(!runner.was_run(PULL));
        assert!(ui.summaries().is_empty());
    }

    #[test]
    fn pull_policy_from_flags() {
        assert_eq!(PullPolicy::from_flags(false, false), PullPolicy::Ask);
        assert_eq!(PullPolicy::from_flags(true, false), PullPolicy::Always);
        assert_eq!(PullPolicy::from_flags(false, true), PullPolicy::Never);
    }
}
