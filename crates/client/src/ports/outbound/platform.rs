//! Platform abstraction ports
//!
//! These traits isolate platform-specific operations (persistent key-value
//! storage, wall-clock time) so that the store and services stay
//! platform-agnostic and testable with in-memory implementations.
//!
//! The auth token is read through [`StorageProvider`] at request time, never
//! cached at module load, so a refreshed token is observed by the next call.

use chrono::{DateTime, Utc};

/// Persistent storage abstraction (browser localStorage / file-backed)
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Wall-clock abstraction for timestamps the client assigns locally
pub trait TimeProvider: Send + Sync {
    /// Current time as UTC datetime
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Storage key constants
///
/// Kept in the ports layer as they define the contract for what keys are
/// used across the application.
pub mod storage_keys {
    /// Bearer token for the script service
    pub const AUTH_TOKEN: &str = "scriptwright_auth_token";
    /// Base URL of the script service
    pub const SERVER_URL: &str = "scriptwright_server_url";
}
