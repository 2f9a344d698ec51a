//! Data models for metric snapshots.
//!
//! ## Submodules
//!
//! - [`snapshot`]: Wire types for the query endpoint response
//! - [`cards`]: Render-ready projection ([`DashboardData`], [`MetricCard`])
//!
//! ## Data Flow
//!
//! ```text
//! QueryResponse (raw JSON)
//!        │
//!        ▼
//! MetricSnapshot (data.result, backend order)
//!        │
//!        ▼
//! DashboardData::from_snapshot()  ──▶  one MetricCard per sample
//! ```

pub mod cards;
pub mod snapshot;

pub use cards::{DashboardData, MetricCard};
pub use snapshot::{
    MetricSample, MetricSnapshot, QueryData, QueryResponse, INSTANCE_LABEL, NAME_LABEL,
};
