//! HTTP transport seam.
//!
//! The executor only needs "send a GET with headers, receive status and body".
//! [`ReqwestTransport`] is the default implementation; tests and embedders can
//! supply their own [`Transport`].

use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use scarlet_shark_core::{Result, ScarletSharkError};
use tracing::debug;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

/// Minimal async HTTP GET capability
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one GET request with the given headers
    ///
    /// Network-level failures must be reported as
    /// [`ScarletSharkError::Transport`]; any HTTP status is a success here.
    /// For a status other than 200 the body is advisory and may be empty.
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<TransportResponse>;
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    /// Build a transport honouring the configured timeout and User-Agent
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .user_agent(&config.user_agent)
            .gzip(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ScarletSharkError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(http))
    }

    /// Wrap an existing `reqwest` client
    #[must_use]
    pub const fn with_client(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<TransportResponse> {
        let mut request = self.http.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        debug!(status, "response received");

        // the executor never reads a non-200 body
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status != 200 => {
                debug!(status, error = %e, "discarding unreadable error body");
                String::new()
            }
            Err(e) => return Err(map_error(e)),
        };

        Ok(TransportResponse { status, body })
    }
}

fn map_error(error: reqwest::Error) -> ScarletSharkError {
    if error.is_timeout() {
        ScarletSharkError::Transport(format!("request timed out: {error}"))
    } else if error.is_connect() {
        ScarletSharkError::Transport(format!("connection failed: {error}"))
    } else {
        ScarletSharkError::Transport(error.to_string())
    }
}
