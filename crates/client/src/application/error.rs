//! Service layer error types
//!
//! Errors that can occur in application services, abstracting over the
//! HTTP transport and payload decoding.

use thiserror::Error;

use scriptwright_domain::DomainError;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request failed at the HTTP boundary
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Input rejected before any request was issued
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Service returned a payload we could not decode
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Service returned nothing where data was expected
    #[error("Service returned empty response")]
    EmptyResponse,
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            other => ServiceError::Validation(other.to_string()),
        }
    }
}

impl ServiceError {
    /// Check if this is an authorization error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Api(e) if e.is_unauthorized())
    }
}
