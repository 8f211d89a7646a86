//! Common test utilities for E2E tests

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use donordash::data::{Project, ProjectStore};
use donordash::error::Result;
use donordash::{AppState, config};
use tokio::net::TcpListener;

/// Fixture store serving a fixed set of records.
pub struct FixtureStore {
    pub projects: Vec<Project>,
}

#[async_trait]
impl ProjectStore for FixtureStore {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }
}

/// Store whose queries always fail, as when the store is unreachable.
pub struct UnreachableStore;

#[async_trait]
impl ProjectStore for UnreachableStore {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Err(mongodb::error::Error::custom("connection refused").into())
    }
}

/// Sample records matching the shape of the real collection.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            funding_status: Some("completed".to_string()),
            school_state: Some("CA".to_string()),
            resource_type: Some("Books".to_string()),
            poverty_level: Some("high poverty".to_string()),
            date_posted: Some("23/03/2017 00:00".to_string()),
            total_donations: Some(282.0),
        },
        Project {
            funding_status: Some("expired".to_string()),
            school_state: Some("TX".to_string()),
            resource_type: Some("Technology".to_string()),
            poverty_level: Some("highest poverty".to_string()),
            date_posted: Some("01/02/2016 00:00".to_string()),
            total_donations: Some(125.5),
        },
    ]
}

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a test server backed by the sample fixture records.
    pub async fn new() -> Self {
        Self::with_store(Arc::new(FixtureStore {
            projects: sample_projects(),
        }))
        .await
    }

    /// Create a test server with a caller-supplied store.
    pub async fn with_store(store: Arc<dyn ProjectStore>) -> Self {
        donordash::metrics::init_metrics();

        // Create test configuration
        let config = config::AppConfig {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
            },
            database: config::DatabaseConfig {
                uri: None,
                host: "localhost".to_string(),
                port: 27017,
                name: "donorsUSA".to_string(),
                collection: "projects".to_string(),
                max_results: 55_000,
                connect_timeout_seconds: 5,
            },
            dashboard: config::DashboardConfig {
                // Tests run from the package root
                assets_dir: PathBuf::from("static"),
            },
            logging: config::LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        };

        // Initialize app state
        let state = AppState::with_store(config, store);

        // Create HTTP client
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        // Build router
        let app = donordash::build_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait a bit for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr: addr_str,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}
