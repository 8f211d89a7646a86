//! Project data endpoint
//!
//! The single read API the dashboard front end talks to.

use axum::{Router, extract::State, response::Json, routing::get};

use crate::AppState;
use crate::data::Project;
use crate::error::AppError;
use crate::metrics::{HTTP_REQUEST_DURATION_SECONDS, HTTP_REQUESTS_TOTAL};

const PROJECTS_ENDPOINT: &str = "/donorsUS/projects";

/// Create projects router
///
/// Routes:
/// - GET /donorsUS/projects
pub fn projects_router() -> Router<AppState> {
    Router::new().route(PROJECTS_ENDPOINT, get(donor_projects))
}

/// GET /donorsUS/projects
///
/// Serves the project records as a JSON array. Takes no parameters;
/// the projection, cap, and ordering are fixed by configuration and
/// the store. Each request runs against its own scoped connection, so
/// concurrent requests cannot interfere.
async fn donor_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let _timer = HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&["GET", PROJECTS_ENDPOINT])
        .start_timer();

    let projects = state.store.fetch_projects().await?;

    HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", PROJECTS_ENDPOINT, "200"])
        .inc();

    Ok(Json(projects))
}
