//! Error types for the name indexer repository.

mod search_index_error;

pub use search_index_error::SearchIndexError;
