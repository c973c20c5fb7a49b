//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Composed page (tiles, chart, grids)
//! - GET /api/v1/users - Raw fetched records
//! - GET /api/v1/stats - Averages only

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::aggregate::average;
use crate::api::dto::{Averages, StatsResponse, UserListResponse};
use crate::api::state::AppState;
use crate::dashboard::{build_dashboard, Dashboard};

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    let snapshot = state.store.snapshot().await;
    Json(build_dashboard(&snapshot.records, snapshot.phase))
}

/// GET /api/v1/users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<UserListResponse> {
    let snapshot = state.store.snapshot().await;
    Json(UserListResponse {
        count: snapshot.records.len(),
        users: snapshot.records,
        phase: snapshot.phase,
    })
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let snapshot = state.store.snapshot().await;
    let records = &snapshot.records;

    Json(StatsResponse {
        averages: Averages {
            age: average("age", records),
            height: average("height", records),
            weight: average("weight", records),
        },
        count: records.len(),
        phase: snapshot.phase,
    })
}
