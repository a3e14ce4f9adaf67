//! Scarlet Shark API v0.4.

use super::ScarletSharkApi;
use crate::config::ClientConfig;
use crate::executor::RequestExecutor;
use crate::normalize::{domain_to_ascii, url_to_ascii};
use crate::query::QueryBuilder;
use crate::registry::ActionRegistry;
use crate::transport::Transport;
use async_trait::async_trait;
use scarlet_shark_core::{
    DnsQuery, DomainQuery, EmailQuery, HashQuery, IpContext, IpQuery, NetworkQuery, Operation,
    QueryParams, Result, ThreatActorQuery, ThreatToolQuery, UrlQuery,
};
use serde_json::Value;
use std::sync::Arc;

const ACTIONS: ActionRegistry = ActionRegistry::new(
    V04Client::VERSION,
    &[
        (Operation::SearchDns, "/search_dns.php"),
        (Operation::SearchDomain, "/search_domain.php"),
        (Operation::SearchEmail, "/search_email.php"),
        (Operation::SearchHash, "/search_hash.php"),
        (Operation::SearchIp, "/search_ip.php"),
        (Operation::SearchNetwork, "/search_network.php"),
        (Operation::SearchThreatActors, "/search_threat_actors.php"),
        (Operation::SearchThreatTools, "/search_threat_tools.php"),
        (Operation::SearchUrl, "/search_url.php"),
    ],
);

/// Client for API version `v0.4`
#[derive(Clone)]
pub struct V04Client {
    executor: RequestExecutor,
}

impl V04Client {
    /// Version key served by this client
    pub const VERSION: &'static str = "v0.4";

    /// Create a client sending requests through `transport`
    #[must_use]
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            executor: RequestExecutor::new(config, transport),
        }
    }

    async fn call(&self, operation: Operation, params: QueryParams) -> Result<Option<Value>> {
        let path = QueryBuilder::new(&ACTIONS).build(operation, &params)?;
        self.executor.execute(&path).await
    }
}

#[async_trait]
impl ScarletSharkApi for V04Client {
    fn version(&self) -> &'static str {
        Self::VERSION
    }

    async fn search_dns(&self, query: DnsQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("ip", query.ip)
            .param("hostname", query.hostname)
            .param("nonce", query.nonce);
        self.call(Operation::SearchDns, params).await
    }

    async fn search_domain(&self, query: DomainQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("domain", Some(domain_to_ascii(&query.domain)?))
            .param("nonce", query.nonce);
        self.call(Operation::SearchDomain, params).await
    }

    async fn search_email(&self, query: EmailQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("emails", Some(query.emails))
            .param("nonce", query.nonce);
        self.call(Operation::SearchEmail, params).await
    }

    async fn search_hash(&self, query: HashQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("sha256", query.sha256)
            .param("md5", query.md5)
            .param("nonce", query.nonce);
        self.call(Operation::SearchHash, params).await
    }

    async fn search_ip(&self, query: IpQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("ips", Some(query.ips))
            .param("context", query.context.map(IpContext::as_str))
            .param("time_period", query.time_period)
            .param("time_zone", query.time_zone)
            .param("nonce", query.nonce);
        self.call(Operation::SearchIp, params).await
    }

    async fn search_network(&self, query: NetworkQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("ip", Some(query.ip))
            .param("nonce", query.nonce);
        self.call(Operation::SearchNetwork, params).await
    }

    async fn search_threat_actors(&self, query: ThreatActorQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("query", query.query)
            .param("threat_actor_id", query.threat_actor_id)
            .param("vertical", query.vertical)
            .param("nonce", query.nonce);
        self.call(Operation::SearchThreatActors, params).await
    }

    async fn search_threat_tools(&self, query: ThreatToolQuery) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .param("query", query.query)
            .param("threat_actor_id", query.threat_actor_id)
            .param("nonce", query.nonce);
        self.call(Operation::SearchThreatTools, params).await
    }

    async fn search_url(&self, query: UrlQuery) -> Result<Option<Value>> {
        let urls = query
            .urls
            .iter()
            .map(String::as_str)
            .map(url_to_ascii)
            .collect::<Result<Vec<_>>>()?;
        let params = QueryParams::new()
            .param("urls", Some(urls))
            .param("nonce", query.nonce);
        self.call(Operation::SearchUrl, params).await
    }
}
