use super::state::ServerState;
use crate::config::ApiKeyConfig;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;

pub const HEADER_API_KEY: &str = "X-API-KEY";
const AUTH_REALM: &str = "Movies API";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub key: String,
    pub owner_name: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner_name: owner_name.into(),
        }
    }
}

impl From<ApiKeyConfig> for ApiKey {
    fn from(config: ApiKeyConfig) -> Self {
        Self::new(config.key, config.owner_name)
    }
}

/// The set of pre-shared keys accepted by the API.
#[derive(Debug, Default)]
pub struct ApiKeyProvider {
    keys: Vec<ApiKey>,
}

impl ApiKeyProvider {
    pub fn new(keys: Vec<ApiKey>) -> Self {
        Self { keys }
    }

    /// Looks up the key matching `key` exactly.
    pub fn provide(&self, key: &str) -> Option<&ApiKey> {
        self.keys.iter().find(|k| k.key == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<Vec<ApiKeyConfig>> for ApiKeyProvider {
    fn from(configs: Vec<ApiKeyConfig>) -> Self {
        Self::new(configs.into_iter().map(ApiKey::from).collect())
    }
}

/// A caller that presented a known API key.
#[derive(Debug)]
pub struct ApiClient {
    pub owner_name: String,
}

#[derive(Debug)]
pub enum ApiKeyRejection {
    Missing,
    Unknown,
}

impl IntoResponse for ApiKeyRejection {
    fn into_response(self) -> Response {
        let challenge = format!(
            "ApiKey realm=\"{}\", key_name=\"{}\"",
            AUTH_REALM, HEADER_API_KEY
        );
        let mut response = StatusCode::UNAUTHORIZED.into_response();
        if let Ok(value) = HeaderValue::from_str(&challenge) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, value);
        }
        response
    }
}

fn extract_api_key_from_headers(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(HEADER_API_KEY)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

impl FromRequestParts<ServerState> for ApiClient {
    type Rejection = ApiKeyRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let key = match extract_api_key_from_headers(parts) {
            Some(key) => key,
            None => {
                debug!("No {} header in request to {}", HEADER_API_KEY, parts.uri);
                return Err(ApiKeyRejection::Missing);
            }
        };

        match ctx.api_keys.provide(&key) {
            Some(api_key) => {
                debug!("Request authorized for {}", api_key.owner_name);
                Ok(ApiClient {
                    owner_name: api_key.owner_name.clone(),
                })
            }
            None => {
                debug!("Unknown API key presented to {}", parts.uri);
                Err(ApiKeyRejection::Unknown)
            }
        }
    }
}
