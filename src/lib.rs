//! donordash - a read-only dashboard backend for school-funding data
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      API Layer (Axum)                       │
//! │  - Static dashboard page + assets                           │
//! │  - Project data endpoint (JSON)                             │
//! │  - Health / metrics endpoints                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                             │
//! │  - MongoDB (scoped client per request, read-only)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `api`: HTTP handlers for the dashboard page and the data endpoint
//! - `data`: Project model and the document store accessor
//! - `config`: Configuration management
//! - `error`: Error types
//! - `metrics`: Prometheus instruments

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;

use std::sync::Arc;

/// Application state shared across all handlers
///
/// This struct is cloned for each request. It holds only immutable
/// pieces: the configuration and the store handle. The store itself
/// opens a fresh connection per query, so nothing here is mutated
/// between requests.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// Read-only project store
    pub store: Arc<dyn data::ProjectStore>,
}

impl AppState {
    /// Initialize application state with the MongoDB-backed store.
    ///
    /// No connection is opened here; the store connects per request.
    pub fn new(config: config::AppConfig) -> Self {
        let store = data::MongoProjectStore::new(config.database.clone());
        Self::with_store(config, Arc::new(store))
    }

    /// Initialize application state with a caller-supplied store.
    ///
    /// Used by tests to substitute the store implementation.
    pub fn with_store(
        config: config::AppConfig,
        store: Arc<dyn data::ProjectStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Build the Axum router with all routes.
///
/// This is shared by the binary and integration tests to keep route
/// composition consistent across environments.
pub fn build_router(state: AppState) -> axum::Router {
    use axum::Router;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(api::dashboard_router(&state.config.dashboard))
        .merge(api::projects_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(api::metrics_router())
}

async fn health_check() -> &'static str {
    "OK"
}
