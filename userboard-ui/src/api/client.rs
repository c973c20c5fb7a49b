//! HTTP API Client
//!
//! Functions for communicating with the Userboard REST API.

use gloo_net::http::Request;

use crate::state::DashboardView;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8086/api/v1";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "userboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Fetch the composed dashboard page
pub async fn fetch_dashboard() -> Result<DashboardView, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiError>()
            .await
            .map(|e| e.error.message)
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("API error {}: {}", status, message));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
