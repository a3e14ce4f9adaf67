/// Parameters for `search_email`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailQuery {
    /// Email addresses to search threat data for
    pub emails: Vec<String>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl EmailQuery {
    /// Create a query for the given addresses
    #[must_use]
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
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

/// Parameters for `search_hash`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashQuery {
    /// SHA256 digest to search for
    pub sha256: Option<String>,
    /// MD5 digest to search for
    pub md5: Option<String>,
    /// Opaque value echoed back by the API
    pub nonce: Option<i64>,
}

impl HashQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search by SHA256
    #[must_use]
    pub fn sha256(digest: impl Into<String>) -> Self {
        Self::new().with_sha256(digest)
    }

    /// Search by MD5
    #[must_use]
    pub fn md5(digest: impl Into<String>) -> Self {
        Self::new().with_md5(digest)
    }

    /// Set the SHA256 digest
    #[must_use]
    pub fn with_sha256(mut self, digest: impl Into<String>) -> Self {
        self.sha256 = Some(digest.into());
        self
    }

    /// Set the MD5 digest
    #[must_use]
    pub fn with_md5(mut self, digest: impl Into<String>) -> Self {
        self.md5 = Some(digest.into());
        self
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: i64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}
