//! # Name Indexer Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search engine behind the name indexer. It includes definitions for errors,
//! interfaces, request/response types, and a concrete implementation for
//! OpenSearch clusters running the name-matching plugin.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use client::SearchIndexClient;
pub use config::SearchConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::{IndexConfig, OpenSearchClient};
pub use types::{NameSearchRequest, SearchMatch};
