use thiserror::Error;

/// Result type alias for Scarlet Shark operations
pub type Result<T> = std::result::Result<T, ScarletSharkError>;

/// Errors that can occur when using the Scarlet Shark API
#[derive(Error, Debug)]
pub enum ScarletSharkError {
    /// No client implementation is registered for the requested API version
    #[error("no Scarlet Shark client is available for API version {version}")]
    UnsupportedVersion {
        /// The requested version key
        version: String,
    },

    /// The operation has no endpoint in the bound API version
    #[error("operation {operation} is not supported by API version {version}")]
    UnsupportedOperation {
        /// Operation identifier
        operation: String,
        /// API version the client is bound to
        version: String,
    },

    /// Every parameter of the call was absent or empty
    #[error("no parameters provided for {operation}: at least one search parameter is required")]
    NoParametersProvided {
        /// Operation identifier
        operation: String,
    },

    /// A domain could not be converted to its ASCII-compatible form
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Network-level failure (DNS, TLS, timeout, connection refused)
    #[error("transport error: {0}")]
    Transport(String),

    /// HTTP 200 with a body that is not valid JSON
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The API answered with a negative result code
    #[error("API error: {message}")]
    Api {
        /// Message taken from `result.message`
        message: String,
    },

    /// Client construction failed
    #[error("configuration error: {0}")]
    Config(String),
}

impl ScarletSharkError {
    /// Returns true if the upstream API reported the error
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns true if the request failed at the network level
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the error is raised before any network I/O happens
    #[must_use]
    pub const fn is_before_request(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedVersion { .. }
                | Self::UnsupportedOperation { .. }
                | Self::NoParametersProvided { .. }
                | Self::InvalidDomain(_)
                | Self::Config(_)
        )
    }

    /// Returns the upstream message if this is an API error
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScarletSharkError::UnsupportedVersion {
            version: "v9.9".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no Scarlet Shark client is available for API version v9.9"
        );

        let err = ScarletSharkError::Api {
            message: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "API error: invalid key");
        assert_eq!(err.api_message(), Some("invalid key"));
    }

    #[test]
    fn test_error_classification() {
        let guard = ScarletSharkError::NoParametersProvided {
            operation: "search_dns".to_string(),
        };
        assert!(guard.is_before_request());
        assert!(!guard.is_transport_error());

        let transport = ScarletSharkError::Transport("connection refused".to_string());
        assert!(transport.is_transport_error());
        assert!(!transport.is_before_request());
        assert!(transport.api_message().is_none());

        let malformed: ScarletSharkError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(malformed, ScarletSharkError::MalformedResponse(_)));
        assert!(!malformed.is_api_error());
    }
}
