use axum::extract::FromRef;

use crate::catalog::MovieCatalog;
use std::sync::Arc;
use std::time::Instant;

use super::{ApiKeyProvider, ServerConfig};

pub type GuardedMovieCatalog = Arc<dyn MovieCatalog>;
pub type GuardedApiKeyProvider = Arc<ApiKeyProvider>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedMovieCatalog,
    pub api_keys: GuardedApiKeyProvider,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        catalog: GuardedMovieCatalog,
        api_keys: ApiKeyProvider,
        hash: String,
    ) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            api_keys: Arc::new(api_keys),
            hash,
        }
    }
}

impl FromRef<ServerState> for GuardedMovieCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for GuardedApiKeyProvider {
    fn from_ref(input: &ServerState) -> Self {
        input.api_keys.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
