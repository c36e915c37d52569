//! Request and response bodies of the HTTP API.

use crate::catalog::{MetadataRecord, MovieStatsSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata as exchanged over the API. Every field is optional on input;
/// incomplete entries are accepted and simply never served back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataModel {
    pub movie_id: Option<i32>,
    pub title: Option<String>,
    pub language: Option<String>,
    pub duration: Option<String>,
    pub release_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieStatsModel {
    pub movie_id: i32,
    pub title: String,
    pub average_watch_duration_s: i64,
    pub watches: u64,
    pub release_year: Option<i32>,
}

impl From<MetadataRecord> for MetadataModel {
    fn from(record: MetadataRecord) -> Self {
        Self {
            movie_id: Some(record.movie_id),
            title: Some(record.title),
            language: Some(record.language),
            duration: Some(record.duration),
            release_year: record.release_year,
        }
    }
}

impl From<MetadataModel> for MetadataRecord {
    /// Records created through the API carry no identity of their own, so they
    /// get `id` 0.
    fn from(model: MetadataModel) -> Self {
        Self {
            id: 0,
            movie_id: model.movie_id.unwrap_or(0),
            title: model.title.unwrap_or_default(),
            language: model.language.unwrap_or_default(),
            duration: model.duration.unwrap_or_default(),
            release_year: model.release_year,
        }
    }
}

impl From<MovieStatsSummary> for MovieStatsModel {
    fn from(summary: MovieStatsSummary) -> Self {
        Self {
            movie_id: summary.movie_id,
            title: summary.title,
            average_watch_duration_s: summary.average_watch_duration_s,
            watches: summary.watches,
            release_year: summary.release_year,
        }
    }
}
