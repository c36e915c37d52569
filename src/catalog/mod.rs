mod csv_source;
mod engine;
mod error;
mod models;
mod source;
mod transient_store;

pub use csv_source::CsvMovieData;
#[cfg(test)]
pub use engine::MockMovieCatalog;
pub use engine::{AggregationEngine, MovieCatalog};
pub use error::{CatalogError, CatalogErrorKind};
pub use models::{MetadataRecord, MovieStatsSummary, StatsRecord};
#[cfg(test)]
pub use source::{MockMetadataSource, MockStatsSource};
pub use source::{InMemoryMovieData, MetadataSource, SourceError, StatsSource};
pub use transient_store::TransientMetadataStore;
