//! Search index client implementation.
//!
//! This module provides the main client for interacting with the search
//! index. Application code uses this to manage the index lifecycle, register
//! mappings, and index, retrieve, and search documents.

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{NameSearchRequest, SearchMatch};
use name_indexer_shared::{MappingDocument, PersonDocument};

/// The main client for interacting with the search index.
/// Application code uses this to manage the index and its documents.
pub struct SearchIndexClient {
    provider: Box<dyn SearchIndexProvider>,
}

impl SearchIndexClient {
    /// Create a new SearchIndexClient over the given provider.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self { provider }
    }

    /// Check that the search cluster is reachable and healthy.
    pub async fn health_check(&self) -> Result<bool, SearchIndexError> {
        self.provider.health_check().await
    }

    /// Check whether the index exists.
    pub async fn index_exists(&self) -> Result<bool, SearchIndexError> {
        self.provider.index_exists().await
    }

    /// Create the index, deleting any existing index of the same name first.
    ///
    /// The mapping registration that follows creation must target a fresh
    /// index: custom field types cannot be changed on a live mapping.
    pub async fn recreate_index(&self) -> Result<(), SearchIndexError> {
        if self.provider.index_exists().await? {
            self.provider.delete_index().await?;
        }
        self.provider.create_index().await
    }

    /// Delete the index. Absent index is success.
    pub async fn delete_index(&self) -> Result<(), SearchIndexError> {
        self.provider.delete_index().await
    }

    /// Register a type mapping against the index.
    /// Input: type name (must equal the mapping's shape key, case included)
    /// Output: Result<(), SearchIndexError>
    pub async fn register_mapping(
        &self,
        type_name: &str,
        mapping: &MappingDocument,
    ) -> Result<(), SearchIndexError> {
        if type_name.is_empty() {
            return Err(SearchIndexError::validation("type name is required"));
        }
        if type_name != mapping.shape_name() {
            return Err(SearchIndexError::validation(format!(
                "type name '{}' does not match mapping shape '{}'",
                type_name,
                mapping.shape_name()
            )));
        }

        self.provider.register_mapping(type_name, mapping).await
    }

    /// Index a single document.
    /// Input: PersonDocument (id required)
    /// Output: Result<(), SearchIndexError>
    pub async fn index(&self, document: &PersonDocument) -> Result<(), SearchIndexError> {
        if document.id.is_empty() {
            return Err(SearchIndexError::validation("document id is required"));
        }

        self.provider.index_document(document).await
    }

    /// Retrieve a document by id.
    pub async fn get(&self, id: &str) -> Result<PersonDocument, SearchIndexError> {
        if id.is_empty() {
            return Err(SearchIndexError::validation("document id is required"));
        }

        self.provider.get_document(id).await
    }

    /// Run a rescored name search.
    /// Input: NameSearchRequest (field and query required)
    /// Output: Result<Vec<SearchMatch>, SearchIndexError> (ordered by relevance)
    pub async fn search(
        &self,
        request: &NameSearchRequest,
    ) -> Result<Vec<SearchMatch>, SearchIndexError> {
        if request.field.is_empty() {
            return Err(SearchIndexError::validation("search field is required"));
        }
        if request.query.is_empty() {
            return Err(SearchIndexError::validation("query text is required"));
        }

        self.provider.search(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use name_indexer_shared::{FieldDescriptor, TypeOverrides};

    /// Provider stub that records how many calls reached the backend.
    struct MockProvider {
        calls: Arc<AtomicUsize>,
        index_exists: bool,
    }

    impl MockProvider {
        fn new() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: calls.clone(),
                    index_exists: false,
                },
                calls,
            )
        }

        fn with_existing_index(mut self) -> Self {
            self.index_exists = true;
            self
        }

        fn sample_person() -> PersonDocument {
            PersonDocument {
                id: "1".to_string(),
                full_name: "Joe Schmoe".to_string(),
                local_name: "Joe the Schmoe".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1980, 11, 11).unwrap(),
            }
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockProvider {
        async fn health_check(&self) -> Result<bool, SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }

        async fn index_exists(&self) -> Result<bool, SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.index_exists)
        }

        async fn create_index(&self) -> Result<(), SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete_index(&self) -> Result<(), SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn register_mapping(
            &self,
            _type_name: &str,
            _mapping: &MappingDocument,
        ) -> Result<(), SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn index_document(&self, _document: &PersonDocument) -> Result<(), SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn get_document(&self, id: &str) -> Result<PersonDocument, SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if id == "1" {
                Ok(Self::sample_person())
            } else {
                Err(SearchIndexError::document_not_found(id))
            }
        }

        async fn search(
            &self,
            _request: &NameSearchRequest,
        ) -> Result<Vec<SearchMatch>, SearchIndexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![SearchMatch {
                document: Self::sample_person(),
                score: 1.5,
            }])
        }
    }

    fn person_mapping() -> MappingDocument {
        MappingDocument::synthesize(
            "person",
            &[FieldDescriptor::new("full_name", "string")],
            &TypeOverrides::new().with("string", "rni_name"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_mapping_rejects_type_name_mismatch() {
        let (provider, calls) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));

        let result = client.register_mapping("Person", &person_mapping()).await;

        assert!(matches!(result, Err(SearchIndexError::ValidationError(_))));
        // Rejected before the provider is reached
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_register_mapping_matching_type_name() {
        let (provider, calls) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));

        client
            .register_mapping("person", &person_mapping())
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_index_rejects_empty_id() {
        let (provider, calls) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));
        let mut person = MockProvider::sample_person();
        person.id.clear();

        let result = client.index(&person).await;

        assert!(matches!(result, Err(SearchIndexError::ValidationError(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let (provider, _) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));

        let result = client.search(&NameSearchRequest::new("full_name", "")).await;

        assert!(matches!(result, Err(SearchIndexError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_search_returns_provider_matches() {
        let (provider, _) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));

        let matches = client
            .search(&NameSearchRequest::new("full_name", "Joe Schmoe"))
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].document.full_name, "Joe Schmoe");
        assert_eq!(matches[0].score, 1.5);
    }

    #[tokio::test]
    async fn test_recreate_index_deletes_existing_first() {
        let (provider, calls) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider.with_existing_index()));

        client.recreate_index().await.unwrap();

        // exists + delete + create
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_recreate_index_skips_delete_when_absent() {
        let (provider, calls) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));

        client.recreate_index().await.unwrap();

        // exists + create
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_document() {
        let (provider, _) = MockProvider::new();
        let client = SearchIndexClient::new(Box::new(provider));

        let result = client.get("2").await;

        assert!(matches!(result, Err(SearchIndexError::DocumentNotFound(_))));
    }
}
