//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch,
//! etc.).

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::types::{NameSearchRequest, SearchMatch};
use name_indexer_shared::{MappingDocument, PersonDocument};

/// Abstracts the underlying search index implementation (OpenSearch,
/// Elasticsearch, etc.).
///
/// Implementations are injected into `SearchIndexClient` to enable dependency
/// injection and easy testing with mock implementations. All methods return
/// `Result<T, SearchIndexError>` for consistent error handling across
/// backends.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Check that the search cluster is reachable and healthy.
    async fn health_check(&self) -> Result<bool, SearchIndexError>;

    /// Check whether the configured index exists.
    async fn index_exists(&self) -> Result<bool, SearchIndexError>;

    /// Create the configured index with its settings.
    ///
    /// The index must not already exist; recreating over a live index is a
    /// backend error, not an upsert.
    async fn create_index(&self) -> Result<(), SearchIndexError>;

    /// Delete the configured index.
    ///
    /// Deleting an index that does not exist is considered successful.
    async fn delete_index(&self) -> Result<(), SearchIndexError>;

    /// Register a type mapping against the configured index.
    ///
    /// `type_name` must match the document's top-level shape key exactly,
    /// including case; a mismatch is a validation error reported before any
    /// request is sent.
    async fn register_mapping(
        &self,
        type_name: &str,
        mapping: &MappingDocument,
    ) -> Result<(), SearchIndexError>;

    /// Index a single document.
    ///
    /// If a document with the same id already exists, it is replaced.
    async fn index_document(&self, document: &PersonDocument) -> Result<(), SearchIndexError>;

    /// Retrieve a document by id.
    ///
    /// # Returns
    ///
    /// * `Ok(PersonDocument)` - The stored document
    /// * `Err(SearchIndexError::DocumentNotFound)` - If no document has the id
    async fn get_document(&self, id: &str) -> Result<PersonDocument, SearchIndexError>;

    /// Run a rescored name search and return matches ordered by relevance.
    async fn search(
        &self,
        request: &NameSearchRequest,
    ) -> Result<Vec<SearchMatch>, SearchIndexError>;
}
