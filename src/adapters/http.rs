use crate::domain::model::BulkResponse;
use crate::domain::ports::BulkSink;
use crate::utils::error::{Result, SeedError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Sent as `X-API-KEY`; header names are case-insensitive and `http` stores them lowercase.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Joins a base URL and an absolute path with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Headers sent with every request of a run. The key header is only present
/// when a non-empty key is given.
pub fn session_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        let mut value = HeaderValue::from_str(key).map_err(|e| SeedError::ClientBuildError {
            message: format!("API key is not a valid header value: {}", e),
        })?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
    }

    Ok(headers)
}

/// reqwest-backed bulk poster. One instance, and one connection pool, per run.
///
/// `timeout` bounds connecting and each read separately, not the whole
/// request, so a large upload that keeps making progress is not cut off.
#[derive(Debug, Clone)]
pub struct HttpBulkClient {
    client: Client,
    base_url: String,
}

impl HttpBulkClient {
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .default_headers(session_headers(api_key)?)
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .map_err(|e| SeedError::ClientBuildError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BulkSink for HttpBulkClient {
    fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(&self, path: &str, records: &[Value]) -> Result<BulkResponse> {
        let url = self.endpoint(path);
        tracing::debug!("📡 POST {} ({} records)", url, records.len());

        let response = self
            .client
            .post(&url)
            .json(records)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("📡 {} responded with status {}", url, status);

        let body = response.text().await?;

        Ok(BulkResponse { url, status, body })
    }
}
