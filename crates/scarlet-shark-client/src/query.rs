//! Resource path and query string construction.

use crate::registry::ActionRegistry;
use scarlet_shark_core::{Operation, QueryParams, Result, ScarletSharkError};
use url::form_urlencoded;

/// Builds `/{version}/{endpoint}?{query}` resource paths for one API version
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    registry: &'a ActionRegistry,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder over a version's endpoint table
    #[must_use]
    pub const fn new(registry: &'a ActionRegistry) -> Self {
        Self { registry }
    }

    /// Build the resource path for a call
    ///
    /// Absent parameters are dropped. Fails with
    /// [`ScarletSharkError::NoParametersProvided`] if nothing is left, so an
    /// unconstrained query is never sent.
    pub fn build(&self, operation: Operation, params: &QueryParams) -> Result<String> {
        let endpoint = self.registry.resolve(operation)?;

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut count = 0usize;
        for (name, value) in params.present() {
            serializer.append_pair(name, &value.to_query_string());
            count += 1;
        }

        if count == 0 {
            return Err(ScarletSharkError::NoParametersProvided {
                operation: operation.to_string(),
            });
        }

        Ok(format!(
            "/{}{}?{}",
            self.registry.version(),
            endpoint,
            serializer.finish()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: ActionRegistry = ActionRegistry::new(
        "v0.4",
        &[
            (Operation::SearchDns, "/search_dns.php"),
            (Operation::SearchIp, "/search_ip.php"),
            (Operation::SearchEmail, "/search_email.php"),
        ],
    );

    #[test]
    fn test_builds_versioned_path() {
        let params = QueryParams::new()
            .param("ip", Some("8.8.8.8"))
            .param("hostname", None::<String>);
        let path = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchDns, &params)
            .unwrap();
        assert_eq!(path, "/v0.4/search_dns.php?ip=8.8.8.8");
    }

    #[test]
    fn test_empty_and_absent_values_are_dropped() {
        let params = QueryParams::new()
            .param("ip", Some(""))
            .param("hostname", Some("example.com"))
            .param("nonce", None::<i64>);
        let path = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchDns, &params)
            .unwrap();
        assert_eq!(path, "/v0.4/search_dns.php?hostname=example.com");
    }

    #[test]
    fn test_no_parameters_is_rejected() {
        let params = QueryParams::new()
            .param("ip", Some(""))
            .param("hostname", None::<String>)
            .param("nonce", None::<i64>);
        let err = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchDns, &params)
            .unwrap_err();
        assert!(matches!(
            err,
            ScarletSharkError::NoParametersProvided { ref operation } if operation == "search_dns"
        ));
    }

    #[test]
    fn test_values_are_form_encoded() {
        let params = QueryParams::new()
            .param("ips", Some(vec!["1.2.3.4".to_string()]))
            .param("time_zone", Some("America/New York"));
        let path = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchIp, &params)
            .unwrap();
        assert_eq!(
            path,
            "/v0.4/search_ip.php?ips=1.2.3.4&time_zone=America%2FNew+York"
        );
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let emails = vec!["a@example.com".to_string(), "b@example.com".to_string()];
        let params = QueryParams::new().param("emails", Some(emails));
        let path = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchEmail, &params)
            .unwrap();
        assert_eq!(
            path,
            "/v0.4/search_email.php?emails=a%40example.com%2Cb%40example.com"
        );
    }

    #[test]
    fn test_zero_is_kept() {
        let params = QueryParams::new()
            .param("ip", Some("8.8.8.8"))
            .param("nonce", Some(0_i64));
        let path = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchDns, &params)
            .unwrap();
        assert_eq!(path, "/v0.4/search_dns.php?ip=8.8.8.8&nonce=0");
    }

    #[test]
    fn test_unregistered_operation() {
        let params = QueryParams::new().param("query", Some("apt"));
        let err = QueryBuilder::new(&REGISTRY)
            .build(Operation::SearchThreatActors, &params)
            .unwrap_err();
        assert!(matches!(err, ScarletSharkError::UnsupportedOperation { .. }));
    }
}
