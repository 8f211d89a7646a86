//! Document store access
//!
//! All store access goes through this module. Every query opens its own
//! scoped client and releases it unconditionally after the read, matching
//! the one-connection-per-request contract of the endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerAddress};

use super::models::{Project, project_projection};
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::metrics::{DB_QUERIES_TOTAL, DB_QUERY_DURATION_SECONDS, PROJECTS_RETURNED};

/// Backend-agnostic read access to the project collection.
///
/// Handlers call this trait, never a concrete implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetch the allow-listed projection of every project record,
    /// up to the configured cap, in the store's natural order.
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
}

/// MongoDB-backed project store.
///
/// Holds only configuration; connections are created per query and
/// never shared between requests.
pub struct MongoProjectStore {
    config: DatabaseConfig,
}

impl MongoProjectStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Resolve driver options from configuration.
    ///
    /// A full connection URI wins over the host/port pair. Server
    /// selection is bounded so an unreachable store fails the request
    /// instead of hanging on the driver default.
    async fn client_options(&self) -> Result<ClientOptions> {
        let mut options = match &self.config.uri {
            Some(uri) => ClientOptions::parse(uri).await?,
            None => ClientOptions::builder()
                .hosts(vec![ServerAddress::Tcp {
                    host: self.config.host.clone(),
                    port: Some(self.config.port),
                }])
                .build(),
        };

        options.server_selection_timeout =
            Some(Duration::from_secs(self.config.connect_timeout_seconds));
        options.app_name = Some("donordash".to_string());

        Ok(options)
    }

    /// Run the projected, capped find against an open client.
    async fn run_find(&self, client: &Client) -> Result<Vec<Project>> {
        let collection = client
            .database(&self.config.name)
            .collection::<Project>(&self.config.collection);

        let cursor = collection
            .find(doc! {})
            .projection(project_projection())
            .limit(i64::from(self.config.max_results))
            .await?;

        let projects = cursor.try_collect().await?;
        Ok(projects)
    }
}

#[async_trait]
impl ProjectStore for MongoProjectStore {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        DB_QUERIES_TOTAL
            .with_label_values(&["find", &self.config.collection])
            .inc();
        let start = Instant::now();

        let client = Client::with_options(self.client_options().await?)?;
        // Capture the outcome so the client is released on every exit
        // path, query failure included.
        let result = self.run_find(&client).await;
        client.shutdown().await;

        DB_QUERY_DURATION_SECONDS
            .with_label_values(&["find", &self.config.collection])
            .observe(start.elapsed().as_secs_f64());

        match &result {
            Ok(projects) => {
                PROJECTS_RETURNED.observe(projects.len() as f64);
                tracing::debug!(
                    collection = %self.config.collection,
                    count = projects.len(),
                    "Project query completed"
                );
            }
            Err(error) => {
                tracing::warn!(
                    collection = %self.config.collection,
                    %error,
                    "Project query failed"
                );
            }
        }

        result
    }
}
