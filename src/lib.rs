//! # Userboard
//!
//! User Dashboard - fetches a list of users from a demo API once, computes
//! average age, height and weight, and serves a chart plus two data grids.
//!
//! ## Modules
//!
//! - [`source`]: One-shot fetch of the user list
//! - [`store`]: In-memory record list and load phase
//! - [`aggregate`]: Field averages
//! - [`chart`]: Line chart projection
//! - [`columns`]: Grid column inference
//! - [`dashboard`]: Page composition
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use userboard::source::{HttpUserSource, SourceConfig};
//! use userboard::store::RecordStore;
//! use userboard::dashboard::build_dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpUserSource::new(SourceConfig::default())?;
//!     let store = Arc::new(RecordStore::new());
//!     store.load_once(&source).await;
//!
//!     let snapshot = store.snapshot().await;
//!     let view = build_dashboard(&snapshot.records, snapshot.phase);
//!     for tile in &view.tiles {
//!         println!("{}: {}", tile.title, tile.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod chart;
pub mod columns;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod records;
pub mod source;
pub mod store;

pub use aggregate::average;
pub use api::{build_router, serve, ApiError, AppState};
pub use chart::{ChartData, Dataset};
pub use columns::{infer_columns, ColumnDefinition};
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
pub use dashboard::{build_dashboard, Dashboard, DataGrid, MetricTile};
pub use records::UserRecord;
pub use source::{FetchError, HttpUserSource, UserSource};
pub use store::{LoadPhase, RecordStore};
