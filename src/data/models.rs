//! Data models
//!
//! Rust structs representing the project records read from the store.

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

/// The record fields exposed to clients.
///
/// This allow-list is the only projection ever sent to the store; the
/// identifier field is excluded and no field outside the list is exposed.
pub const PROJECT_FIELDS: [&str; 6] = [
    "funding_status",
    "school_state",
    "resource_type",
    "poverty_level",
    "date_posted",
    "total_donations",
];

/// A single funding project, as served to the dashboard.
///
/// The store enforces no schema, so every field is optional; a field
/// missing from the stored document serializes as `null`. Values are
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Funding state, e.g. "completed" or "expired"
    pub funding_status: Option<String>,
    /// Two-letter US state code of the school
    pub school_state: Option<String>,
    /// Requested resource category, e.g. "Books"
    pub resource_type: Option<String>,
    /// School poverty band, e.g. "high poverty"
    pub poverty_level: Option<String>,
    /// Posting timestamp as stored ("%d/%m/%Y %H:%M")
    pub date_posted: Option<String>,
    pub total_donations: Option<f64>,
}

/// Build the find projection from the allow-list.
///
/// The identifier is suppressed explicitly; everything else is opt-in.
pub fn project_projection() -> Document {
    let mut projection = doc! { "_id": 0 };
    for field in PROJECT_FIELDS {
        projection.insert(field, 1);
    }
    projection
}
