//! HTTP plumbing shared by the port implementations.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RestConfig::new("https://gemex.example.org/api", token)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = GemexRestClient::new(config)?;
//! ```

use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::ports::ApiError;

/// Configuration for the REST client.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the backend, without trailing slash.
    pub base_url: String,
    /// Bearer token for the `Authorization` header.
    token: Secret<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RestConfig {
    /// Creates a configuration with the given base URL and token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: Secret::new(token.into()),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// HTTP client for the GEMEX backend, implementing every port.
pub struct GemexRestClient {
    config: RestConfig,
    client: Client,
}

impl GemexRestClient {
    /// Creates a client with the given configuration.
    pub fn new(config: RestConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::transport(format!("client construction failed: {}", e)))?;

        Ok(Self { config, client })
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if err.is_connect() {
            ApiError::transport(format!("connection failed: {}", err))
        } else {
            ApiError::transport(err.to_string())
        }
    }

    /// Maps non-2xx statuses to the error taxonomy.
    fn check_status(path: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth),
            StatusCode::NOT_FOUND => Err(ApiError::not_found(path)),
            _ => Err(ApiError::Server {
                status: status.as_u16(),
            }),
        }
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(format!("{}: {}", path, e)))
    }

    /// GET returning a decoded body.
    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(self.config.token())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(path, response)?;
        Self::decode(path, response).await
    }

    /// GET where a 404 means the resource does not exist.
    pub(super) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        match self.get_json(path).await {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// POST with a JSON body, returning a decoded body.
    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(self.config.token())
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(path, response)?;
        Self::decode(path, response).await
    }

    /// POST with a JSON body, discarding the response body.
    pub(super) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(self.config.token())
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::check_status(path, response)?;
        Ok(())
    }

    /// PUT with a JSON body, discarding the response body.
    pub(super) async fn put_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(path, "PUT");
        let response = self
            .client
            .put(self.url(path))
            .bearer_auth(self.config.token())
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        Self::check_status(path, response)?;
        Ok(())
    }
}
