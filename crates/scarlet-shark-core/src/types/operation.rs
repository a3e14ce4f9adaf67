use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default API version used by the client factory
pub const DEFAULT_API_VERSION: &str = "v0.4";

/// The closed set of search operations offered by the Scarlet Shark API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Hostname and IP associations
    SearchDns,
    /// Domain information
    SearchDomain,
    /// Threat information for email addresses
    SearchEmail,
    /// SHA256 or MD5 hash lookup
    SearchHash,
    /// IP and threat intel lookup
    SearchIp,
    /// Network information for an IP
    SearchNetwork,
    /// Threat actor lookup
    SearchThreatActors,
    /// Threat tool (malware or legitimate tool) lookup
    SearchThreatTools,
    /// Threat information for URLs
    SearchUrl,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Self; 9] = [
        Self::SearchDns,
        Self::SearchDomain,
        Self::SearchEmail,
        Self::SearchHash,
        Self::SearchIp,
        Self::SearchNetwork,
        Self::SearchThreatActors,
        Self::SearchThreatTools,
        Self::SearchUrl,
    ];

    /// Returns the wire identifier (`search_dns`, `search_domain`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchDns => "search_dns",
            Self::SearchDomain => "search_domain",
            Self::SearchEmail => "search_email",
            Self::SearchHash => "search_hash",
            Self::SearchIp => "search_ip",
            Self::SearchNetwork => "search_network",
            Self::SearchThreatActors => "search_threat_actors",
            Self::SearchThreatTools => "search_threat_tools",
            Self::SearchUrl => "search_url",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let short = normalized.strip_prefix("search_").unwrap_or(&normalized);

        match short {
            "dns" => Ok(Self::SearchDns),
            "domain" => Ok(Self::SearchDomain),
            "email" => Ok(Self::SearchEmail),
            "hash" => Ok(Self::SearchHash),
            "ip" => Ok(Self::SearchIp),
            "network" => Ok(Self::SearchNetwork),
            "threat_actors" => Ok(Self::SearchThreatActors),
            "threat_tools" => Ok(Self::SearchThreatTools),
            "url" => Ok(Self::SearchUrl),
            _ => Err(format!("unknown operation: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_identifiers_are_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!("search_dns".parse::<Operation>(), Ok(Operation::SearchDns));
        assert_eq!("threat-actors".parse::<Operation>(), Ok(Operation::SearchThreatActors));
        assert_eq!("URL".parse::<Operation>(), Ok(Operation::SearchUrl));
        assert!("whois".parse::<Operation>().is_err());

        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_operation_serde_uses_wire_name() {
        let json = serde_json::to_string(&Operation::SearchThreatTools).unwrap();
        assert_eq!(json, "\"search_threat_tools\"");
    }
}
