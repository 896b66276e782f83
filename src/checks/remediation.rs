//! Next steps shown when the checklist did not fully pass.

use super::container::DOCKER_INSTALL_URL;

/// One block of the next-steps output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    /// Position in the numbered list; `None` for trailing notes.
    pub number: Option<usize>,
    pub title: String,
    /// Commands or notes listed under the title.
    pub commands: Vec<String>,
}

impl NextStep {
    /// A numbered step.
    pub fn new(number: usize, title: &str, commands: &[&str]) -> Self {
        Self {
            number: Some(number),
            title: title.to_string(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// An unnumbered note shown after the steps.
    pub fn note(title: &str, commands: &[&str]) -> Self {
        Self {
            number: None,
            title: title.to_string(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Title line, prefixed with the step number when there is one.
    pub fn heading(&self) -> String {
        match self.number {
            Some(n) => format!("{}. {}", n, self.title),
            None => self.title.clone(),
        }
    }
}

/// Build the remediation list.
///
/// The credentials and runtime steps appear only when those checks failed;
/// the dependency, editor and documentation entries are always present.
/// Numbering is sequential over whatever steps are included.
pub fn next_steps(env_configured: bool, runtime_available: bool) -> Vec<NextStep> {
    let mut steps: Vec<(&str, Vec<&str>)> = Vec::new();

    if !env_configured {
        steps.push((
            "Configure environment variables:",
            vec!["./configure.sh", "# Then edit .env with your credentials"],
        ));
    }

    if !runtime_available {
        steps.push(("Install Docker:", vec![DOCKER_INSTALL_URL]));
    }

    steps.push((
        "Install Python dependencies:",
        vec!["pip install -r requirements.txt"],
    ));
    steps.push((
        "Test the MCP-JIRA connection:",
        vec![
            "# Open VS Code in this directory",
            "# The MCP extension will connect to the jira server",
        ],
    ));

    let mut result: Vec<NextStep> = steps
        .iter()
        .enumerate()
        .map(|(i, (title, commands))| NextStep::new(i + 1, title, commands))
        .collect();

    result.push(NextStep::note(
        "📚 Additional documentation:",
        &[
            "- README.md: Complete guide",
            "- DEPLOYMENT.md: Deployment guide",
            "- https://modelcontextprotocol.io/",
        ],
    ));

    result
}
