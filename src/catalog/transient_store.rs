use super::error::CatalogError;
use super::models::MetadataRecord;
use std::sync::Mutex;

/// Append-only log of metadata added while the process runs.
///
/// Nothing here is written back to the data files; the log is lost on restart.
#[derive(Debug, Default)]
pub struct TransientMetadataStore {
    records: Mutex<Vec<MetadataRecord>>,
}

impl TransientMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `records`, in order.
    pub fn with_records(records: Vec<MetadataRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn append(&self, record: MetadataRecord) -> Result<(), CatalogError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| CatalogError::Store("transient metadata store is poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }

    /// Copy of everything appended so far, in insertion order.
    pub fn snapshot(&self) -> Result<Vec<MetadataRecord>, CatalogError> {
        let records = self
            .records
            .lock()
            .map_err(|_| CatalogError::Store("transient metadata store is poisoned".to_string()))?;
        Ok(records.clone())
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
