use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movies_api::config::{AppConfig, CliConfig, FileConfig};
use movies_api::server::{ApiKeyProvider, ServerConfig};
use movies_api::{
    run_server, AggregationEngine, CsvMovieData, RequestsLoggingLevel, TransientMetadataStore,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the movie metadata CSV file.
    #[clap(long, value_parser = parse_path, default_value = "metadata.csv")]
    pub metadata_path: PathBuf,

    /// Path to the viewing stats CSV file.
    #[clap(long, value_parser = parse_path, default_value = "stats.csv")]
    pub stats_path: PathBuf,

    /// The address to listen on.
    #[clap(long, default_value = "127.0.0.1")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// API key accepted in the X-API-KEY header. Can be repeated.
    #[clap(long = "api-key")]
    pub api_keys: Vec<String>,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            metadata_path: args.metadata_path.clone(),
            stats_path: args.stats_path.clone(),
            host: args.host.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            api_keys: args.api_keys.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    for path in [&config.metadata_path, &config.stats_path] {
        if !path.exists() {
            warn!("Data file {:?} does not exist, requests will fail until it does", path);
        }
    }

    info!(
        "Serving metadata from {:?} and stats from {:?}",
        config.metadata_path, config.stats_path
    );
    let movie_data = Arc::new(CsvMovieData::new(&config.metadata_path, &config.stats_path));
    let engine = AggregationEngine::new(
        movie_data.clone(),
        movie_data,
        Arc::new(TransientMetadataStore::new()),
    );

    let api_keys = ApiKeyProvider::from(config.api_keys);
    info!("Accepting {} API keys", api_keys.len());

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level,
        host: config.host,
        port: config.port,
    };

    run_server(server_config, Arc::new(engine), api_keys).await
}
