//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application code to talk to the script service,
//! platform storage, and the notification surface without depending on
//! concrete implementations.

pub mod notifier;
pub mod platform;
pub mod raw_api_port;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use notifier::{Notification, NotificationKind, Notifier};
pub use platform::{storage_keys, StorageProvider, TimeProvider};
pub use raw_api_port::{ApiError, RawApiPort};
