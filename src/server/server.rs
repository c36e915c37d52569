use anyhow::{Context, Result};
use std::{net::SocketAddr, time::Duration};

use tracing::{debug, error, info};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::{
    openapi::security::{ApiKey as ApiKeyScheme, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use super::models::{MetadataModel, MovieStatsModel};
use super::{log_requests, state::*, ApiClient, ApiKeyProvider, ServerConfig, HEADER_API_KEY};
use crate::catalog::{CatalogError, MetadataRecord};

pub const SWAGGER_UI_PATH: &str = "/swagger";
pub const OPENAPI_DOCUMENT_PATH: &str = "/api-docs/openapi.json";

const API_KEY_SCHEME: &str = "api_key";

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request. Please try again and if the problem persists please contact support";

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// Clients only ever see the generic message; details stay in the logs.
fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, GENERIC_ERROR_MESSAGE).into_response()
}

fn catalog_failure(operation: &str, err: CatalogError) -> Response {
    error!("{} failed ({:?}): {}", operation, err.kind(), err);
    bad_request()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

#[utoipa::path(
    get,
    path = "/metadata/{movie_id}",
    tag = "metadata",
    params(("movie_id" = i32, Path, description = "Id of the movie")),
    responses(
        (status = 200, description = "Latest metadata per language", body = Vec<MetadataModel>),
        (status = 400, description = "The request could not be processed", body = String),
        (status = 401, description = "Missing or unknown API key"),
        (status = 404, description = "No valid metadata for the movie", body = String),
    ),
    security(("api_key" = []))
)]
async fn get_metadata(
    _client: ApiClient,
    State(catalog): State<GuardedMovieCatalog>,
    movie_id: Result<Path<i32>, PathRejection>,
) -> Response {
    let movie_id = match movie_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!("Invalid movie id: {}", rejection);
            return bad_request();
        }
    };

    match catalog.get_metadata(movie_id) {
        Ok(records) if records.is_empty() => (
            StatusCode::NOT_FOUND,
            format!("Unable to find metadata for movie id: {}", movie_id),
        )
            .into_response(),
        Ok(records) => {
            let body: Vec<MetadataModel> = records.into_iter().map(MetadataModel::from).collect();
            Json(body).into_response()
        }
        Err(err) => catalog_failure("Get metadata", err),
    }
}

#[utoipa::path(
    post,
    path = "/metadata",
    tag = "metadata",
    request_body = MetadataModel,
    responses(
        (status = 200, description = "Metadata stored until restart"),
        (status = 400, description = "The request could not be processed", body = String),
        (status = 401, description = "Missing or unknown API key"),
    ),
    security(("api_key" = []))
)]
async fn post_metadata(
    client: ApiClient,
    State(catalog): State<GuardedMovieCatalog>,
    body: Result<Json<MetadataModel>, JsonRejection>,
) -> Response {
    let model = match body {
        Ok(Json(model)) => model,
        Err(rejection) => {
            debug!("Rejected metadata body: {}", rejection);
            return bad_request();
        }
    };

    debug!(
        "{} is adding metadata for movie {:?}",
        client.owner_name, model.movie_id
    );
    match catalog.add_metadata(MetadataRecord::from(model)) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => catalog_failure("Add metadata", err),
    }
}

#[utoipa::path(
    get,
    path = "/movies/stats",
    tag = "movies",
    responses(
        (status = 200, description = "Viewing stats, most watched first", body = Vec<MovieStatsModel>),
        (status = 400, description = "The request could not be processed", body = String),
        (status = 401, description = "Missing or unknown API key"),
    ),
    security(("api_key" = []))
)]
async fn get_movie_stats(_client: ApiClient, State(catalog): State<GuardedMovieCatalog>) -> Response {
    match catalog.get_movie_stats() {
        Ok(summaries) => {
            let body: Vec<MovieStatsModel> =
                summaries.into_iter().map(MovieStatsModel::from).collect();
            Json(body).into_response()
        }
        Err(err) => catalog_failure("Get movie stats", err),
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Movies API", version = "v1"),
    paths(get_metadata, post_metadata, get_movie_stats),
    components(schemas(MetadataModel, MovieStatsModel)),
    modifiers(&ApiKeySecurity)
)]
pub struct ApiDoc;

/// Declares the `X-API-KEY` header scheme the secured paths refer to.
struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKeyScheme::Header(ApiKeyValue::with_description(
                HEADER_API_KEY,
                "Pre-shared API key",
            ))),
        );
    }
}

pub fn make_app(
    config: ServerConfig,
    catalog: GuardedMovieCatalog,
    api_keys: ApiKeyProvider,
) -> Router {
    let state = ServerState::new(config, catalog, api_keys, env!("GIT_HASH").to_owned());

    let metadata_routes: Router = Router::new()
        .route("/", post(post_metadata))
        .route("/{movie_id}", get(get_metadata))
        .with_state(state.clone());

    let movies_routes: Router = Router::new()
        .route("/stats", get(get_movie_stats))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_DOCUMENT_PATH, ApiDoc::openapi()))
        .nest("/metadata", metadata_routes)
        .nest("/movies", movies_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(
    config: ServerConfig,
    catalog: GuardedMovieCatalog,
    api_keys: ApiKeyProvider,
) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let app = make_app(config, catalog, api_keys);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind to {}", addr))?;

    info!("Ready to serve at {}!", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
