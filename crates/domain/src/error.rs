//! Unified error types for the domain layer
//!
//! Provides a common error type used across domain operations so callers get
//! consistent error handling without falling back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., required field empty for the chosen format)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when required fields are empty or a value combination is not
    /// allowed for the script's format.
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Creates a not-found error for a missing entity.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}
