//! Capabilities the aggregation engine reads its raw records from.
//!
//! Each source hands back the complete record set on every call; the engine
//! never caches across queries.

use super::models::{MetadataRecord, StatsRecord};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a backing data source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Yields every known metadata record, for all movies.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataSource: Send + Sync {
    fn get_all(&self) -> Result<Vec<MetadataRecord>, SourceError>;
}

/// Yields every known viewing session, for all movies.
#[cfg_attr(test, mockall::automock)]
pub trait StatsSource: Send + Sync {
    fn get_all(&self) -> Result<Vec<StatsRecord>, SourceError>;
}

/// Fixed in-memory record sets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieData {
    pub metadata: Vec<MetadataRecord>,
    pub stats: Vec<StatsRecord>,
}

impl InMemoryMovieData {
    pub fn new(metadata: Vec<MetadataRecord>, stats: Vec<StatsRecord>) -> Self {
        Self { metadata, stats }
    }
}

impl MetadataSource for InMemoryMovieData {
    fn get_all(&self) -> Result<Vec<MetadataRecord>, SourceError> {
        Ok(self.metadata.clone())
    }
}

impl StatsSource for InMemoryMovieData {
    fn get_all(&self) -> Result<Vec<StatsRecord>, SourceError> {
        Ok(self.stats.clone())
    }
}
