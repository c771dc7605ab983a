//! Platform DI container
//!
//! Aggregates the platform-specific service implementations behind port
//! traits so the composition root injects a single value.

mod desktop;

use std::sync::Arc;

use crate::ports::outbound::{StorageProvider, TimeProvider};

pub use desktop::{DesktopStorageProvider, DesktopTimeProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProvider>,
    time: Arc<dyn TimeProvider>,
}

impl Platform {
    pub fn new(storage: Arc<dyn StorageProvider>, time: Arc<dyn TimeProvider>) -> Self {
        Self { storage, time }
    }

    pub fn storage(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.storage)
    }

    pub fn time(&self) -> Arc<dyn TimeProvider> {
        Arc::clone(&self.time)
    }
}

/// Create the platform container with desktop providers.
pub fn create_platform() -> Platform {
    Platform::new(
        Arc::new(DesktopStorageProvider::new()),
        Arc::new(DesktopTimeProvider),
    )
}
