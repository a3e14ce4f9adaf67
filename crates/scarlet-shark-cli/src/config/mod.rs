//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "SSHARK_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Scarlet Shark API key.
    pub api_key: Option<String>,

    /// API version to talk to.
    pub api_version: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("org", "pts-project", "sshark")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" | "key" => self.api_key = Some(value.to_string()),
            "api_version" | "version" => self.api_version = Some(value.to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "timeout_secs" | "timeout" => self.timeout_secs = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 api_key        - Your Scarlet Shark API key\n  \
                 api_version    - API version (see `sshark versions`)\n  \
                 output_format  - Default output format (pretty/json/yaml)\n  \
                 timeout_secs   - Request timeout in seconds",
                key
            ),
        }
        Ok(())
    }

    /// API key with everything but the edges hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|k| {
            let chars: Vec<char> = k.chars().collect();
            if chars.len() > 8 {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}...{tail}")
            } else {
                "****".to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_known_keys() {
        let mut config = Config::default();
        config.set("api_key", "0123456789abcdef").unwrap();
        config.set("version", "v0.4").unwrap();
        config.set("output", "yaml").unwrap();
        config.set("timeout", "15").unwrap();

        assert_eq!(config.api_key.as_deref(), Some("0123456789abcdef"));
        assert_eq!(config.api_version.as_deref(), Some("v0.4"));
        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.masked_api_key().as_deref(), Some("0123...cdef"));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("output", "csv").is_err());
        assert!(config.set("timeout", "soon").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.set("api_key", "abc").unwrap();
        config.set("output", "json").unwrap();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.masked_api_key().as_deref(), Some("****"));
    }
}
