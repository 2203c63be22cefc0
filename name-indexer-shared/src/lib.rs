//! # Name Indexer Shared
//!
//! Shared types for the name indexer system: the mapping synthesizer that
//! produces custom field-type mappings for the name-matching plugin, and the
//! document types indexed into the search engine.

pub mod document;
pub mod mapping;

pub use document::{IndexShape, PersonDocument};
pub use mapping::{FieldDescriptor, MappingDocument, MappingError, TypeOverrides};
