/// Parameters for `search_threat_actors`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatActorQuery {
    /// Search string matched against threat actor aliases
    pub query: Option<String>,
    /// Scarlet Shark threat actor id
    pub threat_actor_id: Option<i64>,
    /// Targeted vertical
    pub vertical: Option<String>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl ThreatActorQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search actors by alias
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self::new().with_query(query)
    }

    /// Look up one actor by id
    #[must_use]
    pub fn id(threat_actor_id: i64) -> Self {
        Self::new().threat_actor_id(threat_actor_id)
    }

    /// Set the alias search string
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the threat actor id
    #[must_use]
    pub fn threat_actor_id(mut self, id: i64) -> Self {
        self.threat_actor_id = Some(id);
        self
    }

    /// Set the vertical
    #[must_use]
    pub fn vertical(mut self, vertical: impl Into<String>) -> Self {
        self.vertical = Some(vertical.into());
        self
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Parameters for `search_threat_tools`
///
/// A threat tool can be malware or a legitimate tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatToolQuery {
    /// Search string matched against threat tool aliases
    pub query: Option<String>,
    /// Scarlet Shark id to search by (sent as `threat_actor_id`)
    pub threat_actor_id: Option<i64>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl ThreatToolQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search tools by alias
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self::new().with_query(query)
    }

    /// Look up by id
    #[must_use]
    pub fn id(threat_actor_id: i64) -> Self {
        Self::new().threat_actor_id(threat_actor_id)
    }

    /// Set the alias search string
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the id
    #[must_use]
    pub fn threat_actor_id(mut self, id: i64) -> Self {
        self.threat_actor_id = Some(id);
        self
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}
