//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::store::RecordStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Fetched user records
    pub store: Arc<RecordStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>, config: ApiConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
