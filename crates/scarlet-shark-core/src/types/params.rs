/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Plain string value
    Text(String),
    /// Integer value (zero counts as present)
    Integer(i64),
    /// List of strings, sent comma-joined under one key
    List(Vec<String>),
}

impl QueryValue {
    /// Returns true if the value should be sent
    ///
    /// Empty strings and lists without a non-empty element are absent.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Integer(_) => true,
            Self::List(items) => items.iter().any(|item| !item.is_empty()),
        }
    }

    /// Renders the value as it appears in the query string, before URL encoding
    #[must_use]
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::List(items) => items
                .iter()
                .filter(|item| !item.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[String]> for QueryValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

/// Ordered set of named parameters for one call
///
/// Parameters keep the order in which they were added. Absent values are
/// recorded so the declared parameter list of an operation stays visible,
/// and are skipped by [`QueryParams::present`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(&'static str, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a parameter, absent or not
    #[must_use]
    pub fn param<V: Into<QueryValue>>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.entries.push((name, value.map(Into::into)));
        self
    }

    /// Number of declared parameters, present or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter was declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parameters that will be sent, in declared order
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &QueryValue)> {
        self.entries.iter().filter_map(|(name, value)| {
            value
                .as_ref()
                .filter(|v| v.is_present())
                .map(|v| (*name, v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_predicate() {
        assert!(!QueryValue::from("").is_present());
        assert!(QueryValue::from("8.8.8.8").is_present());
        assert!(QueryValue::Integer(0).is_present());
        assert!(!QueryValue::List(vec![]).is_present());
        assert!(!QueryValue::List(vec![String::new()]).is_present());
        assert!(QueryValue::List(vec![String::new(), "a@b.c".into()]).is_present());
    }

    #[test]
    fn test_list_rendering_skips_empty_items() {
        let value = QueryValue::List(vec!["a".into(), String::new(), "b".into()]);
        assert_eq!(value.to_query_string(), "a,b");
    }

    #[test]
    fn test_present_keeps_declared_order() {
        let params = QueryParams::new()
            .param("ip", None::<String>)
            .param("hostname", Some("example.com"))
            .param("nonce", Some(0_i64))
            .param("empty", Some(""));

        assert_eq!(params.len(), 4);
        let names: Vec<_> = params.present().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["hostname", "nonce"]);
    }
}
