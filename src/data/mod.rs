//! Data layer module
//!
//! Read-only access to the externally-owned project collection:
//! - `models`: the project record and its projection allow-list
//! - `store`: the per-request scoped MongoDB accessor

mod models;
mod store;

pub use models::{PROJECT_FIELDS, Project, project_projection};
pub use store::{MongoProjectStore, ProjectStore};

#[cfg(test)]
pub use store::MockProjectStore;
