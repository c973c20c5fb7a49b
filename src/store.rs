//! Record Store
//!
//! Holds the in-memory user list and its load phase. The list has a single
//! writer, the one-shot load, and is replaced wholesale on success. A failed
//! load is logged and leaves the list as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::records::UserRecord;
use crate::source::UserSource;

/// Where the one-shot load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    /// Fetch has not resolved yet
    Pending,
    Loaded,
    Failed,
}

impl LoadPhase {
    /// Whether the fetch has resolved one way or the other
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadPhase::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Pending => "pending",
            LoadPhase::Loaded => "loaded",
            LoadPhase::Failed => "failed",
        }
    }
}

/// Copy of the store contents at one point in time
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub records: Vec<UserRecord>,
    pub phase: LoadPhase,
    pub loaded_at: Option<DateTime<Utc>>,
}

struct StoreInner {
    records: Vec<UserRecord>,
    phase: LoadPhase,
    loaded_at: Option<DateTime<Utc>>,
}

/// Shared user list
pub struct RecordStore {
    inner: RwLock<StoreInner>,
    started: AtomicBool,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Empty store, load pending
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                phase: LoadPhase::Pending,
                loaded_at: None,
            }),
            started: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let inner = self.inner.read().await;
        StoreSnapshot {
            records: inner.records.clone(),
            phase: inner.phase,
            loaded_at: inner.loaded_at,
        }
    }

    pub async fn phase(&self) -> LoadPhase {
        self.inner.read().await.phase
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Fetch the users from `source` and publish them.
    ///
    /// Only the first call fetches; later calls return the current phase.
    pub async fn load_once(&self, source: &dyn UserSource) -> LoadPhase {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::debug!("User load already started, skipping");
            return self.phase().await;
        }

        tracing::info!(source = %source.describe(), "Fetching users");

        match source.fetch_users().await {
            Ok(users) => {
                let count = users.len();
                let mut inner = self.inner.write().await;
                inner.records = users;
                inner.phase = LoadPhase::Loaded;
                inner.loaded_at = Some(Utc::now());
                tracing::info!(count, "Users loaded");
                LoadPhase::Loaded
            }
            Err(e) => {
                tracing::error!(source = %source.describe(), error = %e, "Failed to fetch users");
                let mut inner = self.inner.write().await;
                inner.phase = LoadPhase::Failed;
                LoadPhase::Failed
            }
        }
    }

    /// Run [`load_once`](Self::load_once) in the background
    pub fn spawn_load(self: Arc<Self>, source: Arc<dyn UserSource>) -> JoinHandle<LoadPhase> {
        tokio::spawn(async move { self.load_once(source.as_ref()).await })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::records::record;
    use crate::source::FetchError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer;

    /// In-memory source that either returns fixed users or fails
    pub(crate) struct MockSource {
        users: Option<Vec<UserRecord>>,
        pub(crate) calls: AtomicUsize,
    }

    impl MockSource {
        pub(crate) fn users(users: Vec<UserRecord>) -> Self {
            Self {
                users: Some(users),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                users: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl UserSource for MockSource {
        fn describe(&self) -> String {
            "mock".to_string()
        }

        async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.users {
                Some(users) => Ok(users.clone()),
                None => Err(FetchError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    /// Counts error-level events
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn sample_users(n: usize) -> Vec<UserRecord> {
        (0..n)
            .map(|i| record(json!({"id": i, "firstName": format!("User{i}"), "age": 20 + i})))
            .collect()
    }

    #[tokio::test]
    async fn test_new_store_is_pending() {
        let store = RecordStore::new();
        assert_eq!(store.phase().await, LoadPhase::Pending);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_load_success() {
        let store = RecordStore::new();
        let source = MockSource::users(sample_users(4));

        assert_eq!(store.load_once(&source).await, LoadPhase::Loaded);

        let snap = store.snapshot().await;
        assert_eq!(snap.records.len(), 4);
        assert_eq!(snap.phase, LoadPhase::Loaded);
        assert!(snap.loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_load_failure_logs_once_and_keeps_list() {
        let errors = Arc::new(AtomicUsize::new(0));
        let _guard = tracing_subscriber::registry()
            .with(ErrorCounter(Arc::clone(&errors)))
            .set_default();

        let store = RecordStore::new();
        let source = MockSource::failing();

        assert_eq!(store.load_once(&source).await, LoadPhase::Failed);

        let snap = store.snapshot().await;
        assert!(snap.records.is_empty());
        assert!(snap.loaded_at.is_none());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let store = RecordStore::new();
        let source = MockSource::users(sample_users(2));

        store.load_once(&source).await;
        store.load_once(&source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_spawn_load() {
        let store = Arc::new(RecordStore::new());
        let source: Arc<dyn UserSource> = Arc::new(MockSource::users(sample_users(3)));

        let phase = Arc::clone(&store).spawn_load(source).await.unwrap();
        assert_eq!(phase, LoadPhase::Loaded);
        assert_eq!(store.len().await, 3);
    }

    #[test]
    fn test_phase_serialization() {
        assert_eq!(serde_json::to_value(LoadPhase::Pending).unwrap(), json!("pending"));
        assert!(!LoadPhase::Pending.is_settled());
        assert!(LoadPhase::Failed.is_settled());
    }
}
