//! HTTP client for the sharebin paste service.
//!
//! Provides a thin reqwest wrapper with a fixed base address and a JSON
//! content-type default, plus the two paste operations (`create_paste`,
//! `get_paste`). The CLI consumes this client directly. All requests are
//! unauthenticated: the backend attaches no credentials to pastes.

pub mod api;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use sharebin_core::ErrorBody;

/// Backend address used when no environment override is present.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Every request path lives under this prefix on the backend.
pub(crate) const API_PREFIX: &str = "/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure raised by the request helpers, before the paste operations
/// normalize it into a single user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response: connection failure,
    /// timeout, or a success body that failed to decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` carries the
    /// optional error-body field when the backend sent one.
    #[error("request rejected with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

/// HTTP client for the paste service with a fixed base address.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the environment: SHAREBIN_API_URL (or API_URL),
    /// defaulting to localhost.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SHAREBIN_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.build_url(path)).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            // The error body carries an optional `message` field when the
            // backend produced one; any other body shape counts as absent.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::Status { status, message });
        }

        Ok(response.json().await?)
    }
}

// Re-export the wire models and fixed fallback messages for convenience.
pub use api::{CREATE_PASTE_FALLBACK, GET_PASTE_FALLBACK};
pub use sharebin_core::{CreatedPaste, Paste};
