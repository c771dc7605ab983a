//! Infrastructure adapters: HTTP transport, platform services, notifier

pub mod http_client;
pub mod notify;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use http_client::{resolve_server_url, ApiAdapter};
pub use notify::TracingNotifier;
pub use platform::{create_platform, Platform};
