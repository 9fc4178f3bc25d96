use crate::errors::VulngateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File probed in the working directory when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".vulngate.toml";

/// The full configuration surface consumed by the core: a fail threshold
/// for the gate and a verbosity toggle for the summary. Nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Worst score above which the gate fails (strictly greater).
    /// Default 0: any scored vulnerability fails the build.
    #[serde(default = "default_fail_threshold")]
    pub fail_threshold: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Include clean dependencies in the summary output.
    #[serde(default)]
    pub verbose: bool,
}

fn default_fail_threshold() -> f64 {
    0.0
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fail_threshold: default_fail_threshold(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist and parse; without
    /// one, `.vulngate.toml` is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, VulngateError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, VulngateError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            VulngateError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&raw).map_err(|e| {
            VulngateError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values before any gate runs.
    pub fn validate(&self) -> Result<(), VulngateError> {
        let threshold = self.gate.fail_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(VulngateError::Config(format!(
                "fail_threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gate.fail_threshold, 0.0);
        assert!(!config.summary.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[gate]\nfail_threshold = 6.5\n\n[summary]\nverbose = true"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.gate.fail_threshold, 6.5);
        assert!(config.summary.verbose);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[summary]\nverbose = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.gate.fail_threshold, 0.0);
        assert!(config.summary.verbose);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[gate]\nfail_threshold = -1.0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[gate]\nfail_threshold = \"high\"").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_explicit_path_rejected() {
        let err = Config::load(Some(Path::new("/nonexistent/vulngate.toml"))).unwrap_err();
        assert!(matches!(err, VulngateError::Config(_)));
    }
}
