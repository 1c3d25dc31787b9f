//! REST backend speaking the `/models` admin contract

mod backend;
mod http;

use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::types::{ModelName, RecordId};
use crate::utils::log_sanitizer::mask_token;

/// Backend identifier used in log lines.
pub(crate) const BACKEND_NAME: &str = "rest";

/// HTTP implementation of [`AdminBackend`](crate::AdminBackend).
///
/// Every request is rooted at `base_url` and, when configured, carries
/// `Authorization: Bearer <token>`. The session itself is managed elsewhere.
#[derive(Debug)]
pub struct RestBackend {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_token: Option<String>,
}

impl RestBackend {
    /// Create a backend for `base_url` (e.g. `https://shop.example.com/api/admin`).
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Network {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Self::with_client(client, base_url, api_token)
    }

    /// Same as [`new`](Self::new) but reusing an existing `reqwest::Client`.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_token: Option<String>,
    ) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        log::debug!(
            "[{BACKEND_NAME}] base_url={base_url}, token={}",
            api_token.as_deref().map_or_else(|| "none".to_string(), mask_token)
        );
        Ok(Self {
            client,
            base_url,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    pub(crate) fn fields_url(&self, model: &ModelName) -> String {
        format!("{}/models/{}/fields", self.base_url, encode(model.as_str()))
    }

    pub(crate) fn records_url(&self, model: &ModelName) -> String {
        format!("{}/models/{}/records", self.base_url, encode(model.as_str()))
    }

    pub(crate) fn record_url(&self, model: &ModelName, id: &RecordId) -> String {
        format!(
            "{}/models/{}/records/{}",
            self.base_url,
            encode(model.as_str()),
            encode(id.as_str())
        )
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Strip trailing slashes and reject anything that is not http(s).
fn normalize_base_url(url: String) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let valid_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !valid_scheme || !has_host {
        return Err(ClientError::InvalidBaseUrl { url });
    }
    Ok(trimmed.to_string())
}
