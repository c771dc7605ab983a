//! HTTP adapter for the script service
//!
//! Implements [`RawApiPort`] with reqwest. Transport concerns live here:
//! base URL handling, the bearer token header, and normalization of every
//! non-2xx status or transport failure into an [`ApiError`] with a
//! human-readable message.
//!
//! The bearer token is read from platform storage on every request, so a
//! token refreshed elsewhere is picked up by the next call.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::ports::outbound::{storage_keys, ApiError, RawApiPort, StorageProvider};

/// Default script service URL for local development
const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Resolve the script service base URL: environment variable first, then
/// the persisted value, then the local default.
pub fn resolve_server_url(storage: &dyn StorageProvider) -> String {
    std::env::var("SCRIPTWRIGHT_SERVER_URL")
        .ok()
        .or_else(|| storage.load(storage_keys::SERVER_URL))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

pub struct ApiAdapter {
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn StorageProvider>,
}

impl ApiAdapter {
    /// Create an adapter for the given base URL.
    ///
    /// The URL is validated eagerly so a misconfigured server address fails
    /// at composition time, not on the first request.
    pub fn new(base_url: &str, storage: Arc<dyn StorageProvider>) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Network(format!("invalid server URL '{base_url}': {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed.to_string().trim_end_matches('/').to_string(),
            storage,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn token(&self) -> Result<String, ApiError> {
        self.storage
            .load(storage_keys::AUTH_TOKEN)
            .ok_or(ApiError::MissingToken)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let token = self.token()?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.send(self.client.put(self.url(path)).json(body))
            .await
            .map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path)))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::MemoryStorage;

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let storage = Arc::new(MemoryStorage::new());
        assert!(ApiAdapter::new("not a url", storage).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let storage = Arc::new(MemoryStorage::new());
        let adapter =
            ApiAdapter::new("http://localhost:3000/", storage).expect("valid URL");
        assert_eq!(
            adapter.url("/scripts/list-scripts"),
            "http://localhost:3000/scripts/list-scripts"
        );
    }

    #[test]
    fn persisted_server_url_is_used_when_env_is_unset() {
        let storage = MemoryStorage::new();
        storage.save(storage_keys::SERVER_URL, "http://stored:4000");
        if std::env::var("SCRIPTWRIGHT_SERVER_URL").is_err() {
            assert_eq!(resolve_server_url(&storage), "http://stored:4000");
        }
    }

    #[test]
    fn missing_token_is_reported_without_a_request() {
        let storage = Arc::new(MemoryStorage::new());
        let adapter = ApiAdapter::new("http://localhost:3000", storage).expect("valid URL");
        assert_eq!(adapter.token(), Err(ApiError::MissingToken));
    }
}
