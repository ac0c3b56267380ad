//! Runtime configuration for the qcid binaries.
//!
//! Configuration is resolved once at process startup and then passed into whatever needs it.
//! Library code never reads environment variables; the binaries read `QCID_INTAKE` and
//! `QCID_LOG` and hand the raw values to [`RunConfig::from_env_values`].

use crate::constants::DEFAULT_LOG_FILTER;
use std::path::{Path, PathBuf};

/// Environment variable naming an intake sheet to validate at startup.
pub const INTAKE_ENV: &str = "QCID_INTAKE";

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "QCID_LOG";

/// Configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    intake_path: Option<PathBuf>,
    log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            intake_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RunConfig {
    /// Build a `RunConfig` from optional raw values.
    ///
    /// Values that are empty or whitespace-only are treated as unset. An unset log filter
    /// falls back to `qcid=info`.
    pub fn from_env_values(intake: Option<String>, log_filter: Option<String>) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            intake_path: non_blank(intake).map(PathBuf::from),
            log_filter: non_blank(log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn intake_path(&self) -> Option<&Path> {
        self.intake_path.as_deref()
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_use_defaults() {
        let config = RunConfig::from_env_values(None, None);
        assert_eq!(config, RunConfig::default());
        assert!(config.intake_path().is_none());
        assert_eq!(config.log_filter(), "qcid=info");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = RunConfig::from_env_values(Some("   ".into()), Some("".into()));
        assert!(config.intake_path().is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn values_are_trimmed() {
        let config = RunConfig::from_env_values(
            Some(" sheets/intake.yaml ".into()),
            Some(" qcid=debug ".into()),
        );
        assert_eq!(config.intake_path(), Some(Path::new("sheets/intake.yaml")));
        assert_eq!(config.log_filter(), "qcid=debug");
    }
}
