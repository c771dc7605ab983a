//! Scriptwright client - headless composition root binary.
//!
//! Wires the platform container, HTTP adapter, and store the way the UI
//! shell does, then performs one script-list round-trip. Useful for
//! checking connectivity and credentials against a running service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptwright_client::application::Api;
use scriptwright_client::infrastructure::http_client::{resolve_server_url, ApiAdapter};
use scriptwright_client::infrastructure::notify::TracingNotifier;
use scriptwright_client::infrastructure::platform::create_platform;
use scriptwright_client::store::ScriptStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptwright_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scriptwright client");

    // Platform
    let platform = create_platform();

    // HTTP
    let server_url = resolve_server_url(platform.storage().as_ref());
    tracing::info!(%server_url, "Using script service");
    let raw_api = Arc::new(ApiAdapter::new(&server_url, platform.storage())?);
    let api = Api::new(raw_api);

    // Store
    let store = ScriptStore::new(api, Arc::new(TracingNotifier), platform.time());

    match store.fetch_scripts().await {
        Ok(()) => store.with_state(|state| {
            tracing::info!(count = state.scripts.len(), "Script collection loaded");
            for script in &state.scripts {
                tracing::info!(id = %script.id, title = %script.title, updated_at = %script.updated_at, "script");
            }
        }),
        Err(e) => {
            tracing::error!(error = %e, "Initial fetch failed");
        }
    }

    Ok(())
}
