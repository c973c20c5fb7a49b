//! Userboard API Server
//!
//! Run with: cargo run --bin userboard
//!
//! Fetches the user list once in the background and serves the dashboard
//! immediately; requests made before the fetch resolves see an empty list.
//!
//! # Configuration
//!
//! Read from `config.toml` (see `userboard-cli config`), overridden by:
//! - `USERBOARD_SOURCE_URL`: Users endpoint (default: https://dummyjson.com/users)
//! - `USERBOARD_API_HOST` / `USERBOARD_API_PORT`: Bind address (default: 0.0.0.0:8086)
//! - `USERBOARD_LOG_LEVEL` / `USERBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full log filter, wins over the above

use std::sync::Arc;
use userboard::api::{serve, AppState};
use userboard::config::Config;
use userboard::source::{HttpUserSource, UserSource};
use userboard::store::RecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default logging until the config is known, so config loading can log
    let config = {
        let _guard = tracing::subscriber::set_default(tracing_subscriber::fmt().finish());
        Config::load_default()
    };
    userboard::logging::init(&config.logging);

    tracing::info!("Starting Userboard API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Users endpoint: {}", config.source.url);

    let source: Arc<dyn UserSource> = Arc::new(HttpUserSource::new(config.source.client_config())?);
    let store = Arc::new(RecordStore::new());

    // One-shot, not awaited: the page renders empty until it resolves
    let load = Arc::clone(&store).spawn_load(source);

    let state = AppState::new(Arc::clone(&store), config.api.clone());
    serve(state, &config.api).await?;

    if !load.is_finished() {
        tracing::info!("User fetch still in flight at shutdown, dropping it");
        load.abort();
    }

    tracing::info!("Userboard API server stopped");
    Ok(())
}
