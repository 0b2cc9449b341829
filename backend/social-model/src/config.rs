/// Configuration management for the social data layer
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use db_pool::env_utils::{parse_env_flag, parse_env_with_default};
use db_pool::DbConfig;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "social-model";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Apply schema migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Database configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Min connections in pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

// Default values
fn default_run_migrations() -> bool {
    true
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            run_migrations: parse_env_flag("RUN_MIGRATIONS", default_run_migrations()),
        };

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL environment variable not set")?,
            max_connections: parse_env_with_default(
                "DB_MAX_CONNECTIONS",
                default_max_connections(),
            ),
            min_connections: parse_env_with_default(
                "DB_MIN_CONNECTIONS",
                default_min_connections(),
            ),
        };

        Ok(Config { app, database })
    }

    /// Pool settings; timeouts come from the `DB_*_SECS` variables
    pub fn pool_config(&self) -> DbConfig {
        DbConfig {
            max_connections: self.database.max_connections,
            min_connections: self.database.min_connections,
            ..DbConfig::with_url(SERVICE_NAME, self.database.url.clone())
        }
    }
}
