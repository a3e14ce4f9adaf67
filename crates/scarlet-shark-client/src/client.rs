//! Client construction: version registration table, factory and builder.

use crate::api::{ScarletSharkApi, V04Client};
use crate::blocking::BlockingClient;
use crate::config::ClientConfig;
use crate::transport::{ReqwestTransport, Transport};
use scarlet_shark_core::{Result, ScarletSharkError, DEFAULT_API_VERSION};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

type Constructor = fn(&ClientConfig, Arc<dyn Transport>) -> Box<dyn ScarletSharkApi>;

/// Supported API versions and how to build a client for each
const API_CLIENTS: &[(&str, Constructor)] = &[(V04Client::VERSION, v04_client)];

fn v04_client(config: &ClientConfig, transport: Arc<dyn Transport>) -> Box<dyn ScarletSharkApi> {
    Box::new(V04Client::new(config, transport))
}

fn constructor_for(version: &str) -> Result<Constructor> {
    API_CLIENTS
        .iter()
        .find(|(key, _)| *key == version)
        .map(|(_, ctor)| *ctor)
        .ok_or_else(|| ScarletSharkError::UnsupportedVersion {
            version: version.to_string(),
        })
}

/// Selects a client implementation by API version
pub struct ClientFactory;

impl ClientFactory {
    /// Create a client for `version` with default settings
    pub fn get_client(
        api_key: impl Into<String>,
        version: &str,
    ) -> Result<Box<dyn ScarletSharkApi>> {
        ScarletSharkClientBuilder::new(api_key).version(version).build()
    }

    /// Create a client for the default version
    pub fn get_default_client(api_key: impl Into<String>) -> Result<Box<dyn ScarletSharkApi>> {
        Self::get_client(api_key, DEFAULT_API_VERSION)
    }

    /// Version keys with a registered client
    #[must_use]
    pub fn get_supported_versions() -> Vec<&'static str> {
        API_CLIENTS.iter().map(|(key, _)| *key).collect()
    }

    /// Returns true if a client is registered for `version`
    #[must_use]
    pub fn is_supported(version: &str) -> bool {
        API_CLIENTS.iter().any(|(key, _)| *key == version)
    }
}

/// Builder for configuring a Scarlet Shark client
pub struct ScarletSharkClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ScarletSharkClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(api_key),
            transport: None,
        }
    }

    /// Set the API version key
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set a request timeout; without one the transport default applies
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Print every unwrapped result as pretty JSON
    #[must_use]
    pub fn print_json(mut self, enabled: bool) -> Self {
        self.config.print_json = enabled;
        self
    }

    /// Send requests through a custom transport instead of `reqwest`
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// The configuration collected so far
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the client for the configured version
    pub fn build(self) -> Result<Box<dyn ScarletSharkApi>> {
        let constructor = constructor_for(&self.config.version)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        debug!(config = ?self.config, "building client");
        Ok(constructor(&self.config, transport))
    }

    /// Build a synchronous client for the configured version
    pub fn build_blocking(self) -> Result<BlockingClient> {
        BlockingClient::new(self.build()?)
    }
}
