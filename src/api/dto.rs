//! Data Transfer Objects
//!
//! Response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::records::UserRecord;
use crate::store::LoadPhase;

/// Raw user list response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserRecord>,
    pub count: usize,
    pub phase: LoadPhase,
}

/// Averages over the fetched users
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub averages: Averages,
    pub count: usize,
    pub phase: LoadPhase,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Averages {
    pub age: f64,
    pub height: f64,
    pub weight: f64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, starting, degraded
    pub status: String,
    /// Load phase of the user list
    pub phase: LoadPhase,
    /// Number of records held
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
