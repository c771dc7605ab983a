//! Raw API Port - Object-safe HTTP boundary
//!
//! Application services work against typed requests/responses, but the
//! composition root needs an object-safe abstraction it can store behind
//! `Arc<dyn ...>`. `RawApiPort` is that boundary: JSON values in, JSON
//! values out, with every transport concern (base URL, bearer token,
//! status normalization) owned by the adapter. The application layer
//! provides a typed [`Api`](crate::application::api::Api) wrapper on top.

use serde_json::Value;
use thiserror::Error;

/// Errors produced at the HTTP boundary
///
/// Any non-2xx status or thrown transport error is normalized into one of
/// these variants carrying a human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Service error ({status}): {message}")]
    Status { status: u16, message: String },

    /// No bearer token available in storage; the request is never issued
    #[error("No auth token available")]
    MissingToken,

    /// Response body could not be decoded as JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request body could not be encoded as JSON
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Check whether this error is an auth problem (missing or rejected token)
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::MissingToken | ApiError::Status { status: 401, .. }
        )
    }
}

#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
