//! Operation to endpoint mapping per API version.

use scarlet_shark_core::{Operation, Result, ScarletSharkError};

/// Static endpoint table for one API version
#[derive(Debug, Clone, Copy)]
pub struct ActionRegistry {
    version: &'static str,
    actions: &'static [(Operation, &'static str)],
}

impl ActionRegistry {
    /// Create a registry from a version key and its endpoint table
    #[must_use]
    pub const fn new(version: &'static str, actions: &'static [(Operation, &'static str)]) -> Self {
        Self { version, actions }
    }

    /// The version key this table belongs to
    #[must_use]
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Endpoint path for an operation, e.g. `/search_dns.php`
    pub fn resolve(&self, operation: Operation) -> Result<&'static str> {
        self.actions
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, path)| *path)
            .ok_or_else(|| ScarletSharkError::UnsupportedOperation {
                operation: operation.to_string(),
                version: self.version.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTIAL: ActionRegistry =
        ActionRegistry::new("v0.1", &[(Operation::SearchDns, "/search_dns.php")]);

    #[test]
    fn test_resolve_known_operation() {
        assert_eq!(PARTIAL.resolve(Operation::SearchDns).unwrap(), "/search_dns.php");
        assert_eq!(PARTIAL.version(), "v0.1");
    }

    #[test]
    fn test_resolve_unknown_operation() {
        let err = PARTIAL.resolve(Operation::SearchUrl).unwrap_err();
        match err {
            ScarletSharkError::UnsupportedOperation { operation, version } => {
                assert_eq!(operation, "search_url");
                assert_eq!(version, "v0.1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
