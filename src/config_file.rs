//! Configuration file handling for saving and loading invite run settings.
//!
//! Every field has a documented default, so a missing file, an empty JSON
//! object, and a partial file all produce a usable configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::batch::DEFAULT_BATCH_SIZE;
use crate::invite::DEFAULT_ENV_VARIABLE;
use crate::types::CliEnvironment;

/// Default address file, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "extracted_wallets.txt";

/// Default invite CLI executable.
pub const DEFAULT_PROGRAM: &str = "ethos";

/// Invite run configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// Newline-delimited address file
    pub input_file: PathBuf,
    /// Addresses per invite command
    pub batch_size: usize,
    /// Invite CLI executable
    pub program: String,
    /// Deployment selection; `None` launches without the variable
    pub environment: Option<CliEnvironment>,
    /// Name of the variable carrying `environment`
    pub environment_variable: String,
    /// Pass `--wait` to the invite CLI
    pub wait: bool,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            batch_size: DEFAULT_BATCH_SIZE.get(),
            program: DEFAULT_PROGRAM.to_string(),
            environment: Some(CliEnvironment::Testnet),
            environment_variable: DEFAULT_ENV_VARIABLE.to_string(),
            wait: true,
        }
    }
}

impl InviteConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            anyhow::bail!("Input file must be specified");
        }

        if self.batch_size == 0 {
            anyhow::bail!("Batch size must be at least 1");
        }

        // Launched without a shell, so spaces in a path are never split.
        if self.program.trim().is_empty() {
            anyhow::bail!("Program must be specified");
        }

        let var = self.environment_variable.as_str();
        if var.is_empty() {
            anyhow::bail!("Environment variable name must be specified");
        }
        if var.starts_with(|c: char| c.is_ascii_digit()) {
            anyhow::bail!("Environment variable name cannot start with a digit");
        }
        if !var.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            anyhow::bail!("Environment variable name can only contain letters, numbers, and underscores");
        }

        Ok(())
    }

    /// Batch size as the non-zero type the batcher takes.
    pub fn batch_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.batch_size).context("Batch size must be at least 1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = InviteConfig::default();
        assert_eq!(config.input_file, PathBuf::from("extracted_wallets.txt"));
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.program, "ethos");
        assert_eq!(config.environment, Some(CliEnvironment::Testnet));
        assert_eq!(config.environment_variable, "ETHOS_CLI_ENV");
        assert!(config.wait);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_save_load() {
        let config = InviteConfig {
            input_file: PathBuf::from("/tmp/wallets.txt"),
            batch_size: 10,
            program: "ethos-dev".to_string(),
            environment: Some(CliEnvironment::Prod),
            environment_variable: "ETHOS_CLI_ENV".to_string(),
            wait: false,
        };
        let file = NamedTempFile::new().unwrap();
        config.save_to_file(file.path()).unwrap();

        let loaded = InviteConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"batch_size": 5}}"#).unwrap();

        let loaded = InviteConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.batch_size, 5);
        assert_eq!(loaded.program, "ethos");
        assert_eq!(loaded.environment, Some(CliEnvironment::Testnet));
    }

    #[test]
    fn test_null_environment() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"environment": null}}"#).unwrap();

        let loaded = InviteConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.environment, None);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = InviteConfig::load_from_file("/nonexistent/bulkinvite.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(InviteConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_unknown_environment_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"environment": "mainnet"}}"#).unwrap();
        assert!(InviteConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_validation_zero_batch_size() {
        let config = InviteConfig {
            batch_size: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Batch size"));
        assert!(config.batch_size().is_err());
    }

    #[test]
    fn test_validation_empty_program() {
        let config = InviteConfig {
            program: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_program_path_with_spaces() {
        let config = InviteConfig {
            program: "/opt/My Tools/ethos".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_input_file() {
        let config = InviteConfig {
            input_file: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_env_variable_name() {
        for bad in ["", "1ENV", "ETHOS-CLI-ENV", "A=B"] {
            let config = InviteConfig {
                environment_variable: bad.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{bad:?} should be rejected");
        }
    }
}
