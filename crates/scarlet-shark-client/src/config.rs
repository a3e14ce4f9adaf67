//! Client configuration types.

use scarlet_shark_core::DEFAULT_API_VERSION;
use std::time::Duration;

/// The Scarlet Shark API base URL
pub const DEFAULT_BASE_URL: &str = "https://scarletshark.com/api";

/// Settings shared by every versioned client
#[derive(Clone)]
pub struct ClientConfig {
    /// API key, sent as a bearer token on every request
    pub api_key: String,

    /// API version key, e.g. `v0.4`
    pub version: String,

    /// Scheme and host (plus optional prefix) the resource paths are appended to
    pub base_url: String,

    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,

    /// User-Agent header value
    pub user_agent: String,

    /// Print each unwrapped result as pretty JSON to stdout
    pub print_json: bool,
}

impl ClientConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            version: DEFAULT_API_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("scarlet-shark-rust/{}", env!("CARGO_PKG_VERSION")),
            print_json: false,
        }
    }

    /// API key with all but the last four characters hidden
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{tail}")
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.masked_api_key())
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("print_json", &self.print_json)
            .finish()
    }
}
