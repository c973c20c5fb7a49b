//! API access for the dashboard page.

mod client;

pub use client::{fetch_dashboard, get_api_base};
