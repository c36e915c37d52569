use super::source::SourceError;
use thiserror::Error;

/// Failures surfaced by catalog operations.
///
/// Filtering out invalid records and empty results are not errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification handed to the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    SourceUnavailable,
    StoreUnavailable,
}

impl CatalogError {
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            CatalogError::Source(_) => CatalogErrorKind::SourceUnavailable,
            CatalogError::Store(_) => CatalogErrorKind::StoreUnavailable,
        }
    }
}
