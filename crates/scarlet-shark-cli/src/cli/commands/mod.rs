//! Command implementations.

pub mod config;
pub mod indicator;
pub mod network;
pub mod threat;
pub mod versions;

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use scarlet_shark::{ScarletSharkApi, ScarletSharkClientBuilder};
use serde_json::Value;

use crate::output::{self, OutputFormat};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Scarlet Shark API key
    pub api_key: Option<String>,

    /// API version, `None` for the library default
    pub api_version: Option<String>,

    /// Base URL override
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "API key required.\n\n\
                     Set it with one of:\n  \
                     1. --api-key <KEY>\n  \
                     2. SCARLET_SHARK_API_KEY environment variable\n  \
                     3. sshark config set api_key <KEY>"
                )
            })
    }

    /// Create a Scarlet Shark client from the context settings.
    pub fn client(&self) -> anyhow::Result<Box<dyn ScarletSharkApi>> {
        let key = self.require_api_key()?;

        let mut builder = ScarletSharkClientBuilder::new(key);
        if let Some(version) = &self.api_version {
            builder = builder.version(version.as_str());
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }

    /// Print a search result, or a notice when the API returned no data.
    pub fn print_result(&self, result: Option<Value>) -> Result<()> {
        match result {
            Some(value) => println!("{}", output::render(&value, self.output_format)?),
            None => eprintln!("{}", "No data returned".yellow()),
        }
        Ok(())
    }
}

/// Flatten comma-separated values.
pub fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(api_key: Option<&str>) -> Context {
        Context {
            api_key: api_key.map(String::from),
            api_version: None,
            base_url: None,
            timeout_secs: None,
            output_format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_split_list() {
        let values = vec!["a@x.com, b@y.com".to_string(), "c@z.com".to_string(), ",".to_string()];
        assert_eq!(split_list(&values), vec!["a@x.com", "b@y.com", "c@z.com"]);
    }

    #[test]
    fn test_missing_api_key() {
        assert!(context(None).require_api_key().is_err());
        assert!(context(Some("")).client().is_err());
        assert_eq!(context(Some("key")).require_api_key().unwrap(), "key");
    }

    #[test]
    fn test_client_honours_version() {
        let mut ctx = context(Some("key"));
        assert_eq!(ctx.client().unwrap().version(), "v0.4");

        ctx.api_version = Some("v2".to_string());
        let Err(err) = ctx.client() else {
            panic!("v2 should not be supported");
        };
        assert!(err.to_string().contains("v2"));
    }
}
