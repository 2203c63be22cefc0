//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts, IndicesPutMappingParts},
    GetParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::{get_index_settings, IndexConfig};
use crate::opensearch::queries;
use crate::types::{NameSearchRequest, SearchMatch};
use name_indexer_shared::{MappingDocument, PersonDocument};

/// OpenSearch client implementation.
///
/// Drives the index lifecycle and name search against an OpenSearch cluster
/// running the name-matching plugin.
///
/// # Example
///
/// ```ignore
/// use name_indexer_repository::opensearch::{person_mapping, IndexConfig, OpenSearchClient};
///
/// let client = OpenSearchClient::new("http://localhost:9200", IndexConfig::default())?;
/// client.create_index().await?;
/// client.register_mapping("person", &person_mapping()?).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    config: IndexConfig,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `config` - The index configuration containing index name and search settings
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If connection setup fails
    pub fn new(url: &str, config: IndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            index = %config.index,
            "Created OpenSearch client"
        );

        Ok(Self { client, config })
    }

    /// Parse a single search hit into a `SearchMatch`.
    ///
    /// Returns `None` when the hit's `_source` does not deserialize into a
    /// person document.
    fn parse_hit(hit: &Value) -> Option<SearchMatch> {
        let document: PersonDocument = serde_json::from_value(hit["_source"].clone()).ok()?;
        let score = hit["_score"].as_f64().unwrap_or(0.0);
        Some(SearchMatch { document, score })
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    async fn health_check(&self) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let status = body["status"].as_str().unwrap_or("red");
        debug!(status = %status, "Cluster health");
        Ok(status != "red")
    }

    async fn index_exists(&self) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[&self.config.index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        Ok(response.status_code().is_success())
    }

    async fn create_index(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.config.index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(SearchIndexError::index_creation(format!(
                "Create failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.config.index, "Index created");
        Ok(())
    }

    async fn delete_index(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[&self.config.index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::index_deletion(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - the index may not exist
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index deletion failed");
            return Err(SearchIndexError::index_deletion(format!(
                "Delete failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.config.index, "Index deleted");
        Ok(())
    }

    async fn register_mapping(
        &self,
        type_name: &str,
        mapping: &MappingDocument,
    ) -> Result<(), SearchIndexError> {
        // The registration parameter and the document's top-level key must
        // agree, including case.
        if type_name != mapping.shape_name() {
            return Err(SearchIndexError::validation(format!(
                "type name '{}' does not match mapping shape '{}'",
                type_name,
                mapping.shape_name()
            )));
        }

        // OpenSearch has no mapping types: the mapping is registered per
        // index, so only the inner properties body goes on the wire.
        let response = self
            .client
            .indices()
            .put_mapping(IndicesPutMappingParts::Index(&[&self.config.index]))
            .body(mapping.properties_body())
            .send()
            .await
            .map_err(|e| SearchIndexError::mapping(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Mapping registration failed");
            return Err(SearchIndexError::mapping(format!(
                "Put mapping failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.config.index, type_name = %type_name, "Mapping registered");
        Ok(())
    }

    async fn index_document(&self, document: &PersonDocument) -> Result<(), SearchIndexError> {
        if document.id.is_empty() {
            return Err(SearchIndexError::validation("document id is required"));
        }

        let response = self
            .client
            .index(IndexParts::IndexId(&self.config.index, &document.id))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchIndexError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(id = %document.id, "Document indexed");
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<PersonDocument, SearchIndexError> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.config.index, id))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            return Err(SearchIndexError::document_not_found(id));
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Get request failed");
            return Err(SearchIndexError::unknown(format!(
                "Get failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        serde_json::from_value(body["_source"].clone())
            .map_err(|e| SearchIndexError::parse(format!("Invalid document source: {}", e)))
    }

    async fn search(
        &self,
        request: &NameSearchRequest,
    ) -> Result<Vec<SearchMatch>, SearchIndexError> {
        let body = queries::build_name_search(request, &self.config.search);

        let response = self
            .client
            .search(SearchParts::Index(&[&self.config.index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchIndexError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let hits = body["hits"]["hits"]
            .as_array()
            .map(|hits| hits.iter().filter_map(Self::parse_hit).collect())
            .unwrap_or_default();

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_hit() {
        let hit = json!({
            "_source": {
                "id": "1",
                "full_name": "Joe Schmoe",
                "local_name": "Joe the Schmoe",
                "date_of_birth": "1980-11-11"
            },
            "_score": 1.5
        });

        let result = OpenSearchClient::parse_hit(&hit).unwrap();

        assert_eq!(result.document.full_name, "Joe Schmoe");
        assert_eq!(result.document.id, "1");
        assert_eq!(result.score, 1.5);
    }

    #[test]
    fn test_parse_hit_missing_score_defaults_to_zero() {
        let hit = json!({
            "_source": {
                "id": "1",
                "full_name": "Joe Schmoe",
                "local_name": "Joe the Schmoe",
                "date_of_birth": "1980-11-11"
            }
        });

        let result = OpenSearchClient::parse_hit(&hit).unwrap();

        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_parse_hit_invalid_source() {
        let hit = json!({
            "_source": {
                "full_name": "Missing everything else"
            },
            "_score": 1.0
        });

        assert!(OpenSearchClient::parse_hit(&hit).is_none());
    }
}
