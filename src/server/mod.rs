mod api_key;
pub mod config;
mod http_layers;
pub mod models;
pub mod server;
pub mod state;

pub use api_key::{ApiClient, ApiKey, ApiKeyProvider, HEADER_API_KEY};
pub use config::ServerConfig;
pub use http_layers::*;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
