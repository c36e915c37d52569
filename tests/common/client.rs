//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides one method per API endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

/// HTTP test client, optionally sending an API key with every request
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
    api_key: Option<String>,
}

impl TestClient {
    /// Creates a client that sends no API key
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base_url,
            api_key: None,
        }
    }

    /// Creates a client sending the given key
    pub fn with_api_key(base_url: String, api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..Self::new(base_url)
        }
    }

    /// Creates a client sending the key the test server accepts
    ///
    /// This is the most common way to create a test client.
    pub fn authenticated(base_url: String) -> Self {
        Self::with_api_key(base_url, TEST_API_KEY)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.api_key {
            Some(key) => builder.header("X-API-KEY", key),
            None => builder,
        }
    }

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.request(reqwest::Method::GET, "/")
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /api-docs/openapi.json
    pub async fn get_openapi_document(&self) -> Response {
        self.request(reqwest::Method::GET, "/api-docs/openapi.json")
            .send()
            .await
            .expect("OpenAPI document request failed")
    }

    /// GET /metadata/{movie_id}
    pub async fn get_metadata(&self, movie_id: i32) -> Response {
        self.get_metadata_raw(&movie_id.to_string()).await
    }

    /// GET /metadata/{raw} with an arbitrary path segment
    pub async fn get_metadata_raw(&self, raw: &str) -> Response {
        self.request(reqwest::Method::GET, &format!("/metadata/{}", raw))
            .send()
            .await
            .expect("Get metadata request failed")
    }

    /// POST /metadata
    pub async fn post_metadata(&self, body: &Value) -> Response {
        self.request(reqwest::Method::POST, "/metadata")
            .json(body)
            .send()
            .await
            .expect("Post metadata request failed")
    }

    /// POST /metadata with a raw JSON body
    pub async fn post_metadata_raw(&self, body: &str) -> Response {
        self.request(reqwest::Method::POST, "/metadata")
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Post metadata request failed")
    }

    /// GET /movies/stats
    pub async fn get_movie_stats(&self) -> Response {
        self.request(reqwest::Method::GET, "/movies/stats")
            .send()
            .await
            .expect("Get movie stats request failed")
    }
}
