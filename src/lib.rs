//! Movies API
//!
//! Serves movie metadata and viewing statistics aggregated from flat data
//! files. This library exposes the internal modules for testing and reuse.

pub mod catalog;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{AggregationEngine, CsvMovieData, MovieCatalog, TransientMetadataStore};
pub use server::{run_server, RequestsLoggingLevel};
