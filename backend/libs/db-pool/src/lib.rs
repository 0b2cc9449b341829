//! Database connection pool management
//!
//! Builds the PostgreSQL pool shared by every data-access operation. The pool
//! is created once at startup and handed to its consumers explicitly.

pub mod env_utils;
mod metrics;

pub use metrics::{update_pool_metrics, PoolSnapshot};

use env_utils::parse_env_with_default;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};

/// Database connection pool configuration
#[derive(Clone)]
pub struct DbConfig {
    /// Service name for metrics labeling
    pub service_name: String,
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection creation timeout (new connection to PostgreSQL)
    pub connect_timeout_secs: u64,
    /// Connection acquisition timeout (get connection from pool)
    pub acquire_timeout_secs: u64,
    /// Connection idle timeout
    pub idle_timeout_secs: u64,
    /// Connection maximum lifetime
    pub max_lifetime_secs: u64,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("service_name", &self.service_name)
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("max_lifetime_secs", &self.max_lifetime_secs)
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            service_name: String::from("unknown"),
            database_url: String::new(),
            max_connections: 20,
            min_connections: 5,
            connect_timeout_secs: 5,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }
}

impl DbConfig {
    /// Create a new DbConfig from environment variables
    pub fn from_env(service_name: &str) -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable not set".to_string())?;

        Ok(Self::with_url(service_name, database_url))
    }

    /// Build a config for `database_url`, reading the tuning knobs from the
    /// environment and falling back to the defaults.
    pub fn with_url(service_name: &str, database_url: impl Into<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: service_name.to_string(),
            database_url: database_url.into(),
            max_connections: parse_env_with_default(
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
            ),
            min_connections: parse_env_with_default(
                "DB_MIN_CONNECTIONS",
                defaults.min_connections,
            ),
            connect_timeout_secs: parse_env_with_default(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
            acquire_timeout_secs: parse_env_with_default(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            ),
            idle_timeout_secs: parse_env_with_default(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            ),
            max_lifetime_secs: parse_env_with_default(
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime_secs,
            ),
        }
    }

    /// Log pool configuration details
    pub fn log_config(&self) {
        info!(
            service = %self.service_name,
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            connect_timeout_secs = self.connect_timeout_secs,
            acquire_timeout_secs = self.acquire_timeout_secs,
            idle_timeout_secs = self.idle_timeout_secs,
            max_lifetime_secs = self.max_lifetime_secs,
            "Database pool configuration"
        );
    }
}

/// Create a PostgreSQL connection pool and verify it answers a trivial query
pub async fn create_pool(config: DbConfig) -> Result<PgPool, sqlx::Error> {
    debug!(
        "Creating database pool: service={}, max={}, min={}, \
         acquire_timeout={}s, verify_timeout={}s, idle_timeout={}s",
        config.service_name,
        config.max_connections,
        config.min_connections,
        config.acquire_timeout_secs,
        config.connect_timeout_secs,
        config.idle_timeout_secs
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect(&config.database_url)
        .await?;

    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await
    {
        Ok(Ok(_)) => {
            info!(
                service = %config.service_name,
                "Database pool created and verified successfully"
            );
            update_pool_metrics(&pool, &config.service_name);
            Ok(pool)
        }
        Ok(Err(e)) => {
            error!(
                service = %config.service_name,
                error = %e,
                "Database connection verification failed"
            );
            Err(e)
        }
        Err(_) => {
            error!(
                service = %config.service_name,
                timeout_secs = config.connect_timeout_secs,
                "Database connection verification timeout"
            );
            Err(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "Database verification timeout",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_pool_env() {
        for key in [
            "DB_MAX_CONNECTIONS",
            "DB_MIN_CONNECTIONS",
            "DB_CONNECT_TIMEOUT_SECS",
            "DB_ACQUIRE_TIMEOUT_SECS",
            "DB_IDLE_TIMEOUT_SECS",
            "DB_MAX_LIFETIME_SECS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_default_config() {
        let config = DbConfig::default();
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.acquire_timeout_secs, 10);
        assert_eq!(config.idle_timeout_secs, 600);
        assert_eq!(config.max_lifetime_secs, 1800);
    }

    #[test]
    #[serial_test::serial]
    fn test_config_from_env_without_override() {
        clear_pool_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/test");

        let config = DbConfig::from_env("social-model").unwrap();
        assert_eq!(config.service_name, "social-model");
        assert_eq!(config.database_url, "postgres://localhost/test");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);

        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    #[serial_test::serial]
    fn test_config_from_env_requires_url() {
        std::env::remove_var("DATABASE_URL");
        assert!(DbConfig::from_env("social-model").is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_env_override() {
        clear_pool_env();
        std::env::set_var("DB_MAX_CONNECTIONS", "7");
        std::env::set_var("DB_IDLE_TIMEOUT_SECS", "30");

        let config = DbConfig::with_url("social-model", "postgres://localhost/test");
        assert_eq!(config.max_connections, 7);
        assert_eq!(config.idle_timeout_secs, 30);
        assert_eq!(config.min_connections, 5);

        clear_pool_env();
    }

    #[test]
    fn test_debug_redacts_url() {
        let config = DbConfig::with_url("social-model", "postgres://admin:hunter2@db/social");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
