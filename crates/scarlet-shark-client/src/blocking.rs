//! Synchronous client.
//!
//! [`BlockingClient`] drives an async client on its own current-thread
//! runtime, so every call blocks until its single request completes. It must
//! not be used from within an async context.

use crate::api::ScarletSharkApi;
use scarlet_shark_core::{
    DnsQuery, DomainQuery, EmailQuery, HashQuery, IpQuery, NetworkQuery, Result,
    ScarletSharkError, ThreatActorQuery, ThreatToolQuery, UrlQuery,
};
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

/// Blocking wrapper around a versioned client
pub struct BlockingClient {
    inner: Box<dyn ScarletSharkApi>,
    runtime: Runtime,
}

impl BlockingClient {
    /// Wrap an async client
    pub fn new(inner: Box<dyn ScarletSharkApi>) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ScarletSharkError::Config(format!("failed to start runtime: {e}")))?;

        Ok(Self { inner, runtime })
    }

    /// API version key this client talks to
    #[must_use]
    pub fn version(&self) -> &'static str {
        self.inner.version()
    }

    /// See [`ScarletSharkApi::search_dns`]
    pub fn search_dns(&self, query: DnsQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_dns(query))
    }

    /// See [`ScarletSharkApi::search_domain`]
    pub fn search_domain(&self, query: DomainQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_domain(query))
    }

    /// See [`ScarletSharkApi::search_email`]
    pub fn search_email(&self, query: EmailQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_email(query))
    }

    /// See [`ScarletSharkApi::search_hash`]
    pub fn search_hash(&self, query: HashQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_hash(query))
    }

    /// See [`ScarletSharkApi::search_ip`]
    pub fn search_ip(&self, query: IpQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_ip(query))
    }

    /// See [`ScarletSharkApi::search_network`]
    pub fn search_network(&self, query: NetworkQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_network(query))
    }

    /// See [`ScarletSharkApi::search_threat_actors`]
    pub fn search_threat_actors(&self, query: ThreatActorQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_threat_actors(query))
    }

    /// See [`ScarletSharkApi::search_threat_tools`]
    pub fn search_threat_tools(&self, query: ThreatToolQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_threat_tools(query))
    }

    /// See [`ScarletSharkApi::search_url`]
    pub fn search_url(&self, query: UrlQuery) -> Result<Option<Value>> {
        self.runtime.block_on(self.inner.search_url(query))
    }
}
