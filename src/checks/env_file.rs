//! `.env` credentials check.

use std::collections::HashMap;

use crate::config::{
    CheckerSettings, EnvFileParser, DEFAULT_JIRA_SERVER, ENV_FILE, REQUIRED_ENV_KEYS,
};
use crate::ui::UserInterface;

use super::report_file;

/// What the `.env` check found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvCheck {
    /// Every variable parsed from the file, required or not.
    pub vars: HashMap<String, String>,
    /// Required keys that are absent or empty, in declaration order.
    pub missing: Vec<&'static str>,
}

impl EnvCheck {
    /// Whether every required key is present with a non-empty value.
    ///
    /// This is what the summary reports; a file with only unrelated
    /// variables is not considered configured.
    pub fn is_configured(&self) -> bool {
        !self.vars.is_empty() && self.missing.is_empty()
    }

    /// Whether nothing was parsed (file absent, unreadable or empty).
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Value of a variable if present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Required keys missing or empty in `vars`.
pub fn missing_keys(vars: &HashMap<String, String>) -> Vec<&'static str> {
    REQUIRED_ENV_KEYS
        .iter()
        .copied()
        .filter(|key| vars.get(*key).map_or(true, |v| v.is_empty()))
        .collect()
}

/// Check the `.env` file for JIRA credentials.
///
/// An absent file is reported and yields an empty result; it is never an
/// error. Returns everything parsed, whichever keys are missing.
pub fn check_env_file(settings: &CheckerSettings, ui: &mut dyn UserInterface) -> EnvCheck {
    ui.show_section("📋 Checking .env file...");

    let path = settings.env_file();
    if !report_file(ui, &path, ENV_FILE, "Configuration file") {
        tracing::debug!("No env file at {}", path.display());
        return EnvCheck {
            vars: HashMap::new(),
            missing: REQUIRED_ENV_KEYS.to_vec(),
        };
    }

    let vars = match EnvFileParser::load(&path) {
        Ok(vars) => vars,
        Err(e) => {
            ui.error(&format!("Error reading {}: {:#}", ENV_FILE, e));
            HashMap::new()
        }
    };
    tracing::debug!("Parsed {} variables from {}", vars.len(), path.display());

    let missing = missing_keys(&vars);
    for key in REQUIRED_ENV_KEYS {
        if missing.contains(&key) {
            ui.error(&format!("{}: not configured", key));
        } else {
            ui.success(&format!("{}: configured", key));
        }
    }

    let check = EnvCheck { vars, missing };

    if check.get("JIRA_SERVER") == Some(DEFAULT_JIRA_SERVER) {
        ui.warning(&format!(
            "JIRA_SERVER is still the placeholder {}",
            DEFAULT_JIRA_SERVER
        ));
    }

    if !check.missing.is_empty() {
        ui.warning(&format!("Missing variables: {}", check.missing.join(", ")));
        ui.show_hint("Edit the .env file to configure these variables");
    }

    check
}
