use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub metadata_path: Option<String>,
    pub stats_path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,

    /// Pre-shared keys, merged with the ones given on the command line.
    pub api_keys: Vec<ApiKeyConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    pub key: String,
    pub owner_name: String,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
