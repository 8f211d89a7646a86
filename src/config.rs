//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
///
/// Loaded once at process init and immutable thereafter.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Port number (e.g., 5000)
    pub port: u16,
}

/// Document store configuration
///
/// A deployment supplies either a full connection URI or a host/port pair.
/// When both are present the URI wins.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Full MongoDB connection URI (e.g., "mongodb://db.example.com:27017")
    pub uri: Option<String>,
    /// Store host, used when no URI is configured
    pub host: String,
    /// Store port, used when no URI is configured
    pub port: u16,
    /// Database name (e.g., "donorsUSA")
    pub name: String,
    /// Collection holding the project records
    pub collection: String,
    /// Hard ceiling on the number of records returned per query
    pub max_results: u32,
    /// Server-selection bound so an unreachable store fails the request
    /// instead of hanging on the driver's default
    pub connect_timeout_seconds: u64,
}

/// Dashboard asset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Directory holding the dashboard page and its chart bundle
    pub assets_dir: PathBuf,
}

impl DashboardConfig {
    /// Path of the index document served at the root route
    pub fn index_path(&self) -> PathBuf {
        self.assets_dir.join("index.html")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (DONORDASH_*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 27017)?
            .set_default("database.name", "donorsUSA")?
            .set_default("database.collection", "projects")?
            .set_default("database.max_results", 55_000)?
            .set_default("database.connect_timeout_seconds", 10)?
            .set_default("dashboard.assets_dir", "static")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (DONORDASH_*)
            .add_source(
                Environment::with_prefix("DONORDASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), crate::error::AppError> {
        if self.database.max_results == 0 {
            return Err(crate::error::AppError::Config(
                "database.max_results must be greater than 0".to_string(),
            ));
        }

        if self.database.uri.is_none() && self.database.host.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "database.host must not be empty when no database.uri is set".to_string(),
            ));
        }

        if let Some(uri) = &self.database.uri {
            if uri.trim().is_empty() {
                return Err(crate::error::AppError::Config(
                    "database.uri must not be empty when set".to_string(),
                ));
            }
        }

        if self.database.connect_timeout_seconds == 0 {
            return Err(crate::error::AppError::Config(
                "database.connect_timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
