//! Test utilities for outbound ports
//!
//! Hand-written scripted doubles for the port traits, available to unit
//! tests and (behind the `testing` feature) to downstream integration
//! tests. The HTTP double records every issued request and replays a queue
//! of scripted results, so tests can assert both the wire traffic and the
//! resulting state.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use super::notifier::{Notification, Notifier};
use super::platform::{StorageProvider, TimeProvider};
use super::raw_api_port::{ApiError, RawApiPort};

/// A single request issued through the scripted API double
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted [`RawApiPort`] double
///
/// Responses are consumed in FIFO order regardless of method; a call with
/// no scripted response left fails with a network error so tests that
/// over-issue requests fail loudly.
#[derive(Default)]
pub struct ScriptedApi {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next result to hand out
    pub fn push_response(&self, response: Result<Value, ApiError>) {
        let mut responses = lock(&self.responses);
        responses.push_back(response);
    }

    /// All requests issued so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    fn record_and_pop(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        lock(&self.requests).push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

#[async_trait::async_trait]
impl RawApiPort for ScriptedApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.record_and_pop("GET", path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.record_and_pop("POST", path, Some(body))
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.record_and_pop("PUT", path, Some(body))
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.record_and_pop("PUT", path, Some(body)).map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.record_and_pop("DELETE", path, None).map(|_| ())
    }
}

/// Notifier double that records every notification in order
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.notifications).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        lock(&self.notifications).push(notification);
    }
}

/// In-memory storage double
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_token(token: &str) -> Self {
        let storage = Self::default();
        storage.save(super::platform::storage_keys::AUTH_TOKEN, token);
        storage
    }
}

impl StorageProvider for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        lock(&self.values).insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn remove(&self, key: &str) {
        lock(&self.values).remove(key);
    }
}

/// Clock double pinned to a fixed instant
pub struct FixedClock {
    pub instant: DateTime<Utc>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            // Arbitrary but stable instant for assertions
            instant: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single()
                .unwrap_or_else(Utc::now),
        }
    }
}

impl TimeProvider for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }

    fn now_millis(&self) -> u64 {
        self.instant.timestamp_millis().max(0) as u64
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
