//! Dependency initialization and wiring for the name indexer.

use std::env;
use tracing::info;

use crate::IndexingError;
use name_indexer_repository::{IndexConfig, OpenSearchClient, SearchIndexClient};

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default index name.
const DEFAULT_INDEX_NAME: &str = "people";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured search index client ready to use.
    pub search_client: SearchIndexClient,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `INDEX_NAME`: Name of the person index (default: people)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If initialization fails
    pub async fn new() -> Result<Self, IndexingError> {
        let opensearch_url =
            env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        let index_name = env::var("INDEX_NAME").unwrap_or_else(|_| DEFAULT_INDEX_NAME.to_string());

        info!(
            opensearch_url = %opensearch_url,
            index_name = %index_name,
            "Initializing dependencies"
        );

        let provider = OpenSearchClient::new(&opensearch_url, IndexConfig::new(index_name))
            .map_err(|e| {
                IndexingError::config(format!("Failed to create OpenSearch client: {}", e))
            })?;
        let search_client = SearchIndexClient::new(Box::new(provider));

        // Verify OpenSearch is reachable before running the lifecycle
        let healthy = search_client
            .health_check()
            .await
            .map_err(|e| IndexingError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(IndexingError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        Ok(Self { search_client })
    }
}
