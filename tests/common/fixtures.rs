//! Test fixture creation for the CSV data files

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const METADATA_CSV: &str = "\
Id,MovieId,Title,Language,Duration,ReleaseYear
1,1,The Test Movie,EN,1:40:00,2001
2,1,Le Film de Test,FR,1:40:00,2001
3,1,The Test Movie (Remastered),EN,1:41:00,2001
4,1,,DE,1:40:00,2001
5,2,Second Feature,EN,2:05:00,1999
6,3,Broken Movie,EN,1:00:00,
";

const STATS_CSV: &str = "\
movieId,watchDurationMs
1,60000
1,0
2,1000
2,10000
2,100000
99,5000
";

/// Creates a temporary directory holding `metadata.csv` and `stats.csv`
/// Returns (temp_dir, metadata_path, stats_path)
pub fn create_test_data() -> Result<(TempDir, PathBuf, PathBuf)> {
    let dir = TempDir::new()?;

    let metadata_path = dir.path().join("metadata.csv");
    let stats_path = dir.path().join("stats.csv");
    fs::write(&metadata_path, METADATA_CSV)?;
    fs::write(&stats_path, STATS_CSV)?;

    Ok((dir, metadata_path, stats_path))
}
