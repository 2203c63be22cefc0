//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and the custom type mapping for the
//! person index. The name-matching plugin indexes names and dates with its own
//! field types (`rni_name`, `rni_date`), so the mapping is synthesized rather
//! than expressed through the client's typed mapping builders.

use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::errors::SearchIndexError;
use name_indexer_shared::{IndexShape, MappingDocument, PersonDocument, TypeOverrides};

/// The default name of the person search index.
pub const DEFAULT_INDEX_NAME: &str = "people";

/// Configuration for an OpenSearch-backed index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Name of the index all operations target.
    pub index: String,
    /// Query-shaping configuration for searches.
    pub search: SearchConfig,
}

impl IndexConfig {
    /// Create a config for the given index with default search settings.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME)
    }
}

/// The override table for the name-matching plugin.
///
/// Plain strings become `rni_name` fields (analyzed for fuzzy name matching)
/// and dates become `rni_date` fields. Everything else passes through
/// unchanged.
pub fn name_match_overrides() -> TypeOverrides {
    TypeOverrides::new()
        .with("string", "rni_name")
        .with("date", "rni_date")
}

/// Synthesize the mapping document for the person index.
pub fn person_mapping() -> Result<MappingDocument, SearchIndexError> {
    PersonDocument::mapping(&name_match_overrides()).map_err(SearchIndexError::from)
}

/// Get the index settings used at creation time.
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        }
    })
}
