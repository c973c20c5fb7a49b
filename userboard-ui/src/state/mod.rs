//! State Management
//!
//! Global application state and the page types it holds.

pub mod global;

pub use global::{provide_global_state, DashboardView, GlobalState, LoadPhase};
