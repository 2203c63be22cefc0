//! Configuration and dependency wiring for the name indexer.

mod dependencies;

pub use dependencies::Dependencies;
