//! API layer
//!
//! HTTP handlers for:
//! - the static dashboard page
//! - the project data endpoint
//! - Metrics (Prometheus)

mod dashboard;
pub mod metrics;
mod projects;

pub use dashboard::dashboard_router;
pub use metrics::metrics_router;
pub use projects::projects_router;
