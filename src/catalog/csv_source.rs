//! CSV file backed sources.

use super::models::{MetadataRecord, StatsRecord};
use super::source::{MetadataSource, SourceError, StatsSource};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads metadata and stats from two CSV files with a header row.
///
/// Files are opened on every call, so edits on disk are picked up by the next
/// query.
#[derive(Debug, Clone)]
pub struct CsvMovieData {
    metadata_path: PathBuf,
    stats_path: PathBuf,
}

impl CsvMovieData {
    pub fn new(metadata_path: impl Into<PathBuf>, stats_path: impl Into<PathBuf>) -> Self {
        Self {
            metadata_path: metadata_path.into(),
            stats_path: stats_path.into(),
        }
    }

    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let file = std::fs::File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| SourceError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} records from {:?}", records.len(), path);
    Ok(records)
}

impl MetadataSource for CsvMovieData {
    fn get_all(&self) -> Result<Vec<MetadataRecord>, SourceError> {
        read_records(&self.metadata_path)
    }
}

impl StatsSource for CsvMovieData {
    fn get_all(&self) -> Result<Vec<StatsRecord>, SourceError> {
        read_records(&self.stats_path)
    }
}
