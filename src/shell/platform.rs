//! Platform and session detection.

/// Environment variables set by common CI providers.
const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to force the non-interactive UI, where the image pull
/// prompt is answered with its default instead of blocking on stdin.
pub fn is_ci() -> bool {
    is_ci_with(|key: &str| std::env::var(key))
}

/// CI detection with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn is_ci_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARS.iter().any(|var| env_fn(var).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn detects_github_actions() {
        let detected = is_ci_with(|key| {
            if key == "GITHUB_ACTIONS" {
                Ok("true".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        });
        assert!(detected);
    }

    #[test]
    fn no_ci_vars_means_not_ci() {
        assert!(!is_ci_with(|_| Err(VarError::NotPresent)));
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }
}
