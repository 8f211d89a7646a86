//! Dashboard page server
//!
//! Serves the static dashboard document and its chart bundle. The page
//! never touches the store; chart data is fetched by the browser from
//! the projects endpoint.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::AppState;
use crate::config::DashboardConfig;

/// Create dashboard router
///
/// Routes:
/// - GET /            -> the dashboard index document
/// - GET /static/*    -> chart bundle and other page assets
///
/// A missing asset surfaces as the filesystem service's 404.
pub fn dashboard_router(config: &DashboardConfig) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(config.index_path()))
        .nest_service("/static", ServeDir::new(&config.assets_dir))
}
