//! Request and response types for search index operations.

use serde::{Deserialize, Serialize};

use name_indexer_shared::PersonDocument;

/// Request to run a name search against the index.
///
/// The initial `match` query runs against `field` with `query`. Results are
/// then rescored by the plugin's name-scoring function; `rescore_query` is the
/// name handed to that function, defaulting to the match query when not set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameSearchRequest {
    /// Document field to search (e.g. "full_name").
    pub field: String,
    /// Query text for the initial match phase.
    pub query: String,
    /// Name to rescore against, when it differs from the match query.
    pub rescore_query: Option<String>,
}

impl NameSearchRequest {
    /// Create a new search request for the given field and query.
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            query: query.into(),
            rescore_query: None,
        }
    }

    /// Set a rescore name distinct from the match query.
    pub fn with_rescore_query(mut self, rescore_query: impl Into<String>) -> Self {
        self.rescore_query = Some(rescore_query.into());
        self
    }

    /// The name handed to the rescoring function.
    pub fn rescore_name(&self) -> &str {
        self.rescore_query.as_deref().unwrap_or(&self.query)
    }
}

/// A single search hit: the matched document and its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    /// The matched document.
    pub document: PersonDocument,
    /// Relevance score after rescoring.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescore_name_defaults_to_query() {
        let request = NameSearchRequest::new("full_name", "Joe Schmoe");

        assert_eq!(request.rescore_name(), "Joe Schmoe");
    }

    #[test]
    fn test_rescore_name_uses_override() {
        let request =
            NameSearchRequest::new("full_name", "Joe Schmoe").with_rescore_query("Jo Schmoe");

        assert_eq!(request.rescore_name(), "Jo Schmoe");
    }
}
