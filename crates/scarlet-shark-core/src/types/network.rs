use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parameters for `search_dns`
///
/// At least one of `ip` or `hostname` must be set for the call to be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsQuery {
    /// IP address to find hostnames for
    pub ip: Option<String>,
    /// Hostname to find IPs for
    pub hostname: Option<String>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl DnsQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up hostnames for an IP
    #[must_use]
    pub fn ip(ip: impl Into<String>) -> Self {
        Self::new().with_ip(ip)
    }

    /// Look up IPs for a hostname
    #[must_use]
    pub fn hostname(hostname: impl Into<String>) -> Self {
        Self::new().with_hostname(hostname)
    }

    /// Set the IP
    #[must_use]
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Set the hostname
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Parameters for `search_domain`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainQuery {
    /// Domain to search for; Unicode input is converted to its ASCII form
    pub domain: String,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl DomainQuery {
    /// Create a query for the given domain
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            nonce: None,
        }
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Context of an IP lookup, used upstream to refine the threat classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpContext {
    /// The IP was seen in user activity
    UserActivity,
    /// No particular context
    None,
}

impl IpContext {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserActivity => "user_activity",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for IpContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IpContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "user_activity" => Ok(Self::UserActivity),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "unknown IP context: {s} (expected user_activity or none)"
            )),
        }
    }
}

/// Parameters for `search_ip`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpQuery {
    /// v4 or v6 addresses
    pub ips: Vec<String>,
    /// Lookup context
    pub context: Option<IpContext>,
    /// Number of days to show security issues for
    pub time_period: Option<u32>,
    /// PHP time zone name for returned timestamps (UTC upstream by default)
    pub time_zone: Option<String>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl IpQuery {
    /// Create a query for the given addresses
    #[must_use]
    pub fn new<I, S>(ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ips: ips.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the lookup context
    #[must_use]
    pub fn context(mut self, context: IpContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the time period in days
    #[must_use]
    pub fn time_period(mut self, days: u32) -> Self {
        self.time_period = Some(days);
        self
    }

    /// Set the time zone
    #[must_use]
    pub fn time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Parameters for `search_network`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkQuery {
    /// v4 or v6 address
    pub ip: String,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl NetworkQuery {
    /// Create a query for the given address
    #[must_use]
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            nonce: None,
        }
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Parameters for `search_url`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlQuery {
    /// URLs to look up; each host is converted to its ASCII form
    pub urls: Vec<String>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl UrlQuery {
    /// Create a query for the given URLs
    #[must_use]
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            nonce: None,
        }
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_query_builders() {
        let query = DnsQuery::ip("1.2.3.4").with_hostname("example.com").nonce(7);
        assert_eq!(query.ip.as_deref(), Some("1.2.3.4"));
        assert_eq!(query.hostname.as_deref(), Some("example.com"));
        assert_eq!(query.nonce, Some(7));
        assert_eq!(DnsQuery::new(), DnsQuery::default());
    }

    #[test]
    fn test_ip_context_round_trip() {
        assert_eq!("user_activity".parse::<IpContext>(), Ok(IpContext::UserActivity));
        assert_eq!("user-activity".parse::<IpContext>(), Ok(IpContext::UserActivity));
        assert_eq!("NONE".parse::<IpContext>(), Ok(IpContext::None));
        assert!("suspicious".parse::<IpContext>().is_err());
        assert_eq!(IpContext::UserActivity.to_string(), "user_activity");
    }

    #[test]
    fn test_ip_query_builder() {
        let query = IpQuery::new(["1.2.3.4"])
            .context(IpContext::UserActivity)
            .time_period(7)
            .time_zone("Europe/Paris");
        assert_eq!(query.ips, vec!["1.2.3.4".to_string()]);
        assert_eq!(query.context, Some(IpContext::UserActivity));
        assert_eq!(query.time_period, Some(7));
        assert_eq!(query.time_zone.as_deref(), Some("Europe/Paris"));
        assert_eq!(query.nonce, None);
    }
}
