//! Outbound header set
//!
//! Custom headers supplied by the caller as a JSON object and attached to
//! every request sent to the build service.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while parsing a JSON-encoded header mapping
#[derive(Debug, Error)]
pub enum HeaderSetError {
    #[error("headers must be a JSON object of string values: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Immutable mapping of header name to header value
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderSet(BTreeMap<String, String>);

impl HeaderSet {
    /// Creates an empty header set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"Authorization": "Bearer abc"}`
    ///
    /// Blank input yields an empty set.
    pub fn from_json(raw: &str) -> Result<Self, HeaderSetError> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }
        let map: BTreeMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self(map))
    }

    /// Adds or replaces a header
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Header values usually carry credentials
impl fmt::Debug for HeaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, "<redacted>")))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert!(HeaderSet::from_json("").unwrap().is_empty());
        assert!(HeaderSet::from_json("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_object() {
        let headers =
            HeaderSet::from_json(r#"{"Authorization": "Bearer abc", "X-Team": "infra"}"#).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Authorization"), Some("Bearer abc"));
        assert_eq!(headers.get("X-Team"), Some("infra"));
    }

    #[test]
    fn test_rejects_non_object_and_non_string_values() {
        assert!(HeaderSet::from_json("[1, 2]").is_err());
        assert!(HeaderSet::from_json(r#"{"X-Retry": 3}"#).is_err());
        assert!(HeaderSet::from_json("not json").is_err());
    }

    #[test]
    fn test_debug_redacts_values() {
        let headers = HeaderSet::new().with("Authorization", "Bearer secret-token");
        let rendered = format!("{:?}", headers);
        assert!(rendered.contains("Authorization"));
        assert!(!rendered.contains("secret-token"));
    }
}
