//! # Name Indexer
//!
//! Main library for the name indexer lifecycle runner.
//!
//! This crate provides the entry point and configuration for standing up a
//! name-match index: create the index, register the custom type mapping,
//! index and retrieve a sample record, run a rescored name search, and tear
//! the index down.

pub mod config;
pub mod lifecycle;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search index error.
    #[error("Search index error: {0}")]
    SearchIndexError(#[from] name_indexer_repository::SearchIndexError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
