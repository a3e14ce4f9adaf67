//! One-shot GET and result envelope unwrapping.

use crate::config::ClientConfig;
use crate::transport::Transport;
use scarlet_shark_core::{Result, ResultEnvelope};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends resource paths to the API and unwraps the responses
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    base_url: String,
    authorization: String,
    print_json: bool,
}

impl RequestExecutor {
    /// Create an executor from a client configuration
    #[must_use]
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: format!("Bearer {}", config.api_key),
            print_json: config.print_json,
        }
    }

    /// Perform one GET for `resource_path` and return the `result` payload
    ///
    /// Any status other than 200 yields `Ok(None)`: no data, but not an error.
    /// A 200 whose envelope carries a negative `result_code` is an
    /// [`Api`](scarlet_shark_core::ScarletSharkError::Api) error.
    pub async fn execute(&self, resource_path: &str) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, resource_path);
        debug!(path = %resource_path, "GET request");

        let response = self
            .transport
            .get(&url, &[("Authorization", self.authorization.as_str())])
            .await?;

        if response.status != 200 {
            warn!(
                status = response.status,
                path = %resource_path,
                "non-200 response, no data returned"
            );
            return Ok(None);
        }

        let envelope: ResultEnvelope = serde_json::from_str(&response.body)?;
        debug!(result_code = envelope.result_code, "envelope decoded");

        let result = envelope.into_result().inspect_err(|e| {
            warn!(path = %resource_path, error = %e, "API reported an error");
        })?;

        if self.print_json {
            echo_json(&mut std::io::stdout().lock(), &result)?;
        }

        Ok(Some(result))
    }
}

/// Write `result` as pretty JSON followed by a newline
///
/// A failed write is logged and otherwise ignored; the result is still returned.
fn echo_json(out: &mut impl Write, result: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(result)?;
    if let Err(e) = writeln!(out, "{text}") {
        warn!(error = %e, "failed to echo result");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use scarlet_shark_core::ScarletSharkError;
    use serde_json::json;

    fn executor(stub: &StubTransport) -> RequestExecutor {
        let mut config = ClientConfig::new("test-key");
        config.base_url = "https://api.test/".to_string();
        RequestExecutor::new(&config, Arc::new(stub.clone()))
    }

    #[tokio::test]
    async fn test_success_returns_inner_result() {
        let stub = StubTransport::json(&json!({"result_code": 1, "result": {"foo": "bar"}}));
        let result = executor(&stub).execute("/v0.4/search_dns.php?ip=1.1.1.1").await;

        assert_eq!(result.unwrap(), Some(json!({"foo": "bar"})));

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://api.test/v0.4/search_dns.php?ip=1.1.1.1");
        assert_eq!(
            requests[0].headers,
            vec![("Authorization".to_string(), "Bearer test-key".to_string())]
        );
    }

    #[tokio::test]
    async fn test_scalar_and_array_results_pass_through() {
        let stub = StubTransport::json(&json!({"result_code": 0, "result": [1, "two"]}));
        let result = executor(&stub).execute("/x").await.unwrap();
        assert_eq!(result, Some(json!([1, "two"])));

        let stub = StubTransport::json(&json!({"result_code": 2, "result": 42}));
        let result = executor(&stub).execute("/x").await.unwrap();
        assert_eq!(result, Some(json!(42)));
    }

    #[tokio::test]
    async fn test_negative_result_code_is_api_error() {
        let stub = StubTransport::json(&json!({
            "result_code": -1,
            "result": {"message": "invalid key"}
        }));
        let err = executor(&stub).execute("/x").await.unwrap_err();
        assert!(err.is_api_error());
        assert_eq!(err.api_message(), Some("invalid key"));
    }

    #[tokio::test]
    async fn test_missing_result_code_is_api_error() {
        let stub = StubTransport::json(&json!({"result": {"message": "no code"}}));
        let err = executor(&stub).execute("/x").await.unwrap_err();
        assert_eq!(err.api_message(), Some("no code"));
    }

    #[tokio::test]
    async fn test_non_200_is_soft_failure() {
        for status in [201, 404, 500] {
            let stub = StubTransport::new(status, r#"{"result_code": 1, "result": {}}"#);
            let result = executor(&stub).execute("/x").await.unwrap();
            assert!(result.is_none(), "status {status} should yield no data");
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed_response() {
        let stub = StubTransport::new(200, "<html>maintenance</html>");
        let err = executor(&stub).execute("/x").await.unwrap_err();
        assert!(matches!(err, ScarletSharkError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_print_json_returns_result_unchanged() {
        let stub = StubTransport::json(&json!({"result_code": 1, "result": {"ip": "1.1.1.1"}}));
        let mut config = ClientConfig::new("test-key");
        config.print_json = true;
        let executor = RequestExecutor::new(&config, Arc::new(stub.clone()));

        let result = executor.execute("/x").await.unwrap();

        assert_eq!(result, Some(json!({"ip": "1.1.1.1"})));
        assert_eq!(stub.call_count(), 1);
    }

    #[test]
    fn test_echo_writes_pretty_json() {
        let mut out = Vec::new();
        echo_json(&mut out, &json!({"domain": "example.com", "tags": ["c2"]})).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"domain\": \"example.com\",\n  \"tags\": [\n    \"c2\"\n  ]\n}\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_ignores_write_failures() {
        assert!(echo_json(&mut BrokenPipe, &json!(1)).is_ok());
    }
}
