use anyhow::{Context, Result};
use social_model::config::{Config, SERVICE_NAME};
use social_model::SocialStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting {}", SERVICE_NAME);

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(env = %config.app.env, "Configuration loaded");

    let store = SocialStore::connect(config.pool_config())
        .await
        .context("Failed to create database pool")?;

    if config.app.run_migrations {
        store
            .migrate()
            .await
            .context("Failed to apply social schema")?;
    } else {
        info!("RUN_MIGRATIONS disabled, leaving schema untouched");
    }

    let snapshot = db_pool::PoolSnapshot::of(store.pool());
    info!(
        idle = snapshot.idle,
        active = snapshot.active,
        max = snapshot.max,
        "Social schema ready"
    );

    store.pool().close().await;
    Ok(())
}
