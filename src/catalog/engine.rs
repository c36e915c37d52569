//! Aggregation engine.
//!
//! Combines the raw metadata and stats record sets into the two views served
//! by the API:
//! - the latest valid metadata of a movie, one record per language;
//! - per-movie viewing statistics, most watched first.

use super::error::CatalogError;
use super::models::{MetadataRecord, MovieStatsSummary, StatsRecord};
use super::source::{MetadataSource, StatsSource};
use super::transient_store::TransientMetadataStore;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Operations the HTTP layer needs from the catalog.
#[cfg_attr(test, mockall::automock)]
pub trait MovieCatalog: Send + Sync {
    /// Latest valid metadata of `movie_id`, one record per language, ordered
    /// by language.
    fn get_metadata(&self, movie_id: i32) -> Result<Vec<MetadataRecord>, CatalogError>;

    /// Stores `record` for the lifetime of the process. No validation happens
    /// here, invalid records are filtered out on read.
    fn add_metadata(&self, record: MetadataRecord) -> Result<(), CatalogError>;

    /// Viewing statistics for every movie with metadata in the source.
    fn get_movie_stats(&self) -> Result<Vec<MovieStatsSummary>, CatalogError>;
}

pub struct AggregationEngine {
    metadata_source: Arc<dyn MetadataSource>,
    stats_source: Arc<dyn StatsSource>,
    transient_store: Arc<TransientMetadataStore>,
}

impl AggregationEngine {
    pub fn new(
        metadata_source: Arc<dyn MetadataSource>,
        stats_source: Arc<dyn StatsSource>,
        transient_store: Arc<TransientMetadataStore>,
    ) -> Self {
        Self {
            metadata_source,
            stats_source,
            transient_store,
        }
    }
}

#[derive(Default)]
struct SessionTally {
    sessions: u64,
    watches: u64,
    total_duration_ms: i64,
}

impl SessionTally {
    /// Sum of every session's duration divided by the number of watches only.
    /// Zero when nothing was watched.
    fn average_watch_duration_s(&self) -> i64 {
        if self.sessions == 0 {
            return 0;
        }
        i64::try_from(self.watches)
            .ok()
            .and_then(|watches| self.total_duration_ms.checked_div(watches))
            .map(|average_ms| average_ms / 1000)
            .unwrap_or(0)
    }
}

fn tally_sessions(stats: &[StatsRecord]) -> HashMap<i32, SessionTally> {
    let mut tallies: HashMap<i32, SessionTally> = HashMap::new();
    for session in stats {
        let tally = tallies.entry(session.movie_id).or_default();
        tally.sessions += 1;
        tally.total_duration_ms += i64::from(session.watch_duration_ms.unwrap_or(0));
        if session.is_watch() {
            tally.watches += 1;
        }
    }
    tallies
}

/// Keeps the valid records of `movie_id`, the highest `id` per language.
fn latest_per_language(
    records: impl IntoIterator<Item = MetadataRecord>,
    movie_id: i32,
) -> Vec<MetadataRecord> {
    let mut latest: HashMap<String, MetadataRecord> = HashMap::new();
    for record in records
        .into_iter()
        .filter(|r| r.movie_id == movie_id && r.is_valid())
    {
        match latest.get(&record.language) {
            Some(current) if current.id >= record.id => {}
            _ => {
                latest.insert(record.language.clone(), record);
            }
        }
    }

    let mut result: Vec<MetadataRecord> = latest.into_values().collect();
    result.sort_by(|a, b| a.language.cmp(&b.language));
    result
}

impl MovieCatalog for AggregationEngine {
    fn get_metadata(&self, movie_id: i32) -> Result<Vec<MetadataRecord>, CatalogError> {
        if movie_id <= 0 {
            return Ok(Vec::new());
        }

        let mut records = self.metadata_source.get_all()?;
        records.extend(self.transient_store.snapshot()?);

        let result = latest_per_language(records, movie_id);
        debug!(
            "Resolved {} metadata records for movie {}",
            result.len(),
            movie_id
        );
        Ok(result)
    }

    fn add_metadata(&self, record: MetadataRecord) -> Result<(), CatalogError> {
        debug!(
            "Adding transient metadata for movie {} ({:?})",
            record.movie_id, record.language
        );
        self.transient_store.append(record)
    }

    fn get_movie_stats(&self) -> Result<Vec<MovieStatsSummary>, CatalogError> {
        let stats = self.stats_source.get_all()?;
        let metadata = self.metadata_source.get_all()?;

        let tallies = tally_sessions(&stats);

        // One entry per movie, in first-seen order; the first record describes it.
        let mut summaries: Vec<MovieStatsSummary> = Vec::new();
        let mut seen: HashSet<i32> = HashSet::new();
        for record in metadata {
            if !seen.insert(record.movie_id) {
                continue;
            }

            let (watches, average_watch_duration_s) = tallies
                .get(&record.movie_id)
                .map(|t| (t.watches, t.average_watch_duration_s()))
                .unwrap_or((0, 0));

            summaries.push(MovieStatsSummary {
                movie_id: record.movie_id,
                title: record.title,
                release_year: record.release_year,
                watches,
                average_watch_duration_s,
            });
        }

        summaries.sort_by(|a, b| {
            b.watches
                .cmp(&a.watches)
                .then_with(|| b.release_year.cmp(&a.release_year))
        });

        debug!(
            "Aggregated stats for {} movies from {} sessions",
            summaries.len(),
            stats.len()
        );
        Ok(summaries)
    }
}
