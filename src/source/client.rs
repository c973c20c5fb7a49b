//! HTTP User Source
//!
//! Reads `{ "users": [...] }` from the users endpoint with a single GET.
//! No retries, no pagination, no auth.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{FetchError, UserSource};
use crate::records::UserRecord;

/// Public demo endpoint
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

/// Configuration for the HTTP source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Full URL of the users endpoint
    pub url: String,
    /// Request timeout in milliseconds, unbounded when `None`
    pub request_timeout_ms: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_USERS_URL.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl SourceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Expected body of the users endpoint. Other top-level keys
/// (`total`, `skip`, `limit`) are ignored.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserRecord>,
}

/// Users endpoint client
pub struct HttpUserSource {
    client: Client,
    config: SourceConfig,
}

impl HttpUserSource {
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    fn describe(&self) -> String {
        self.config.url.clone()
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: UsersResponse = serde_json::from_str(&body)?;

        tracing::debug!(count = parsed.users.len(), "Decoded users response");
        Ok(parsed.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source_for(url: String) -> HttpUserSource {
        HttpUserSource::new(SourceConfig::new(url)).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SourceConfig::default();
        assert_eq!(config.url, "https://dummyjson.com/users");
        assert!(config.request_timeout_ms.is_none());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let router = Router::new().route(
            "/users",
            get(|| async {
                r#"{"users": [{"id": 1, "firstName": "Emily", "age": 28},
                              {"id": 2, "firstName": "Michael", "age": 35}],
                    "total": 2, "skip": 0, "limit": 30}"#
            }),
        );
        let base = spawn_server(router).await;

        let users = source_for(format!("{}/users", base)).fetch_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].text("firstName"), "Michael");
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let router = Router::new().route(
            "/users",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_server(router).await;

        let err = source_for(format!("{}/users", base)).fetch_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let router = Router::new()
            .route("/garbage", get(|| async { "not json" }))
            .route("/nousers", get(|| async { r#"{"people": []}"# }));
        let base = spawn_server(router).await;

        let err = source_for(format!("{}/garbage", base)).fetch_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = source_for(format!("{}/nousers", base)).fetch_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(format!("http://{}/users", addr)).fetch_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
