//! User Source
//!
//! Where the record list comes from. The dashboard only ever asks a source
//! for its users once; the HTTP source reads them from the demo users API.

mod client;

pub use client::{HttpUserSource, SourceConfig, UsersResponse, DEFAULT_USERS_URL};

use async_trait::async_trait;
use thiserror::Error;

use crate::records::UserRecord;

/// Anything that can produce the list of user records
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Human readable location, used in logs
    fn describe(&self) -> String;

    /// Fetch the complete user list
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// Fetching the users failed. All causes are handled the same way.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
