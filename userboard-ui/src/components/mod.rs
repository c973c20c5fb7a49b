//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod data_grid;
pub mod metric_card;

pub use chart::Chart;
pub use data_grid::DataGrid;
pub use metric_card::MetricCard;
