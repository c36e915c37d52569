mod file_config;

pub use file_config::{ApiKeyConfig, FileConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::net::IpAddr;
use std::path::PathBuf;

/// Owner recorded for keys passed with `--api-key`.
pub const CLI_API_KEY_OWNER: &str = "cli";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub metadata_path: PathBuf,
    pub stats_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub metadata_path: PathBuf,
    pub stats_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub api_keys: Vec<ApiKeyConfig>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; API keys from both are kept.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let metadata_path = file
            .metadata_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.metadata_path.clone());
        let stats_path = file
            .stats_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.stats_path.clone());

        let host_str = file.host.unwrap_or_else(|| cli.host.clone());
        let host: IpAddr = match host_str.parse() {
            Ok(host) => host,
            Err(_) => bail!("Invalid host address: {:?}", host_str),
        };

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let mut api_keys = file.api_keys;
        api_keys.extend(cli.api_keys.iter().map(|key| ApiKeyConfig {
            key: key.clone(),
            owner_name: CLI_API_KEY_OWNER.to_string(),
        }));

        if api_keys.is_empty() {
            bail!("At least one API key must be specified via --api-key or in config file");
        }
        if let Some(blank) = api_keys.iter().find(|k| k.key.trim().is_empty()) {
            bail!("API key of {:?} is blank", blank.owner_name);
        }

        Ok(Self {
            metadata_path,
            stats_path,
            host,
            port,
            logging_level,
            api_keys,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
