use serde::{Deserialize, Serialize};

/// One known fact about a movie, in one language.
///
/// `id` identifies the record itself and is used to pick the most recent entry
/// when several records describe the same movie in the same language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetadataRecord {
    #[serde(rename = "Id", alias = "id")]
    pub id: i32,
    #[serde(rename = "MovieId", alias = "movieId")]
    pub movie_id: i32,
    #[serde(rename = "Title", alias = "title", default)]
    pub title: String,
    #[serde(rename = "Language", alias = "language", default)]
    pub language: String,
    /// Free-form, e.g. "1:37:00".
    #[serde(rename = "Duration", alias = "duration", default)]
    pub duration: String,
    #[serde(rename = "ReleaseYear", alias = "releaseYear", default)]
    pub release_year: Option<i32>,
}

impl MetadataRecord {
    /// A record is only served when all its descriptive fields are filled in
    /// and it points at a real movie.
    pub fn is_valid(&self) -> bool {
        self.movie_id > 0
            && !self.title.trim().is_empty()
            && !self.language.trim().is_empty()
            && !self.duration.trim().is_empty()
            && self.release_year.is_some()
    }
}

/// One recorded viewing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatsRecord {
    #[serde(rename = "movieId", alias = "MovieId")]
    pub movie_id: i32,
    #[serde(rename = "watchDurationMs", alias = "WatchDurationMs", default)]
    pub watch_duration_ms: Option<i32>,
}

impl StatsRecord {
    /// Only sessions with a strictly positive duration count as a watch.
    pub fn is_watch(&self) -> bool {
        self.watch_duration_ms.is_some_and(|ms| ms > 0)
    }
}

/// Viewing statistics for a single movie, derived on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieStatsSummary {
    pub movie_id: i32,
    pub title: String,
    pub release_year: Option<i32>,
    pub watches: u64,
    pub average_watch_duration_s: i64,
}
