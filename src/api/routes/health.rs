//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (user load has resolved)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::store::LoadPhase;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 200 once the user fetch has resolved, loaded or failed.
/// 503 while it is still in flight.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.store.phase().await.is_settled() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let phase = state.store.phase().await;
    let records = state.store.len().await;

    let status = match phase {
        LoadPhase::Pending => "starting",
        LoadPhase::Loaded => "healthy",
        // The dashboard still serves, just without users
        LoadPhase::Failed => "degraded",
    };

    Json(HealthResponse {
        status: status.to_string(),
        phase,
        records,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
