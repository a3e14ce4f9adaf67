//! Versioned API clients.

mod v04;

pub use v04::V04Client;

use async_trait::async_trait;
use scarlet_shark_core::{
    DnsQuery, DomainQuery, EmailQuery, HashQuery, IpQuery, NetworkQuery, Result,
    ThreatActorQuery, ThreatToolQuery, UrlQuery,
};
use serde_json::Value;

/// The search operations offered by every Scarlet Shark API version
///
/// Each call performs at most one request. `Ok(None)` means the API answered
/// with a non-200 status: no data, which callers must not read as success.
#[async_trait]
pub trait ScarletSharkApi: Send + Sync {
    /// API version key this client talks to
    fn version(&self) -> &'static str;

    /// Known hostname and IP associations
    async fn search_dns(&self, query: DnsQuery) -> Result<Option<Value>>;

    /// Information on a domain
    async fn search_domain(&self, query: DomainQuery) -> Result<Option<Value>>;

    /// Threat information for email addresses
    async fn search_email(&self, query: EmailQuery) -> Result<Option<Value>>;

    /// Information on a SHA256 or MD5 hash
    async fn search_hash(&self, query: HashQuery) -> Result<Option<Value>>;

    /// IP information and threat intel
    async fn search_ip(&self, query: IpQuery) -> Result<Option<Value>>;

    /// Network information for an IP
    async fn search_network(&self, query: NetworkQuery) -> Result<Option<Value>>;

    /// A threat actor, or the actors targeting a vertical
    async fn search_threat_actors(&self, query: ThreatActorQuery) -> Result<Option<Value>>;

    /// A threat tool, malware or legitimate
    async fn search_threat_tools(&self, query: ThreatToolQuery) -> Result<Option<Value>>;

    /// Threat information for URLs
    async fn search_url(&self, query: UrlQuery) -> Result<Option<Value>>;
}
