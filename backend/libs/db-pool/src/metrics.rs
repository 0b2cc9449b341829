//! Prometheus gauges for the database connection pool

use prometheus::{register_int_gauge_vec, IntGaugeVec};
use sqlx::PgPool;

lazy_static::lazy_static! {
    /// Database connection pool size by state (idle/active/max)
    static ref DB_POOL_CONNECTIONS: IntGaugeVec = register_int_gauge_vec!(
        "db_pool_connections",
        "Database pool connection count by state",
        &["service", "state"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

/// Snapshot of pool occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub idle: i64,
    pub active: i64,
    pub max: i64,
}

impl PoolSnapshot {
    /// Read the current pool occupancy without touching the gauges
    pub fn of(pool: &PgPool) -> Self {
        let size = pool.size() as i64;
        let idle = pool.num_idle() as i64;
        Self {
            idle,
            active: size - idle,
            max: pool.options().get_max_connections() as i64,
        }
    }
}

/// Publish the current pool occupancy and return it
pub fn update_pool_metrics(pool: &PgPool, service: &str) -> PoolSnapshot {
    let snapshot = PoolSnapshot::of(pool);

    DB_POOL_CONNECTIONS
        .with_label_values(&[service, "idle"])
        .set(snapshot.idle);
    DB_POOL_CONNECTIONS
        .with_label_values(&[service, "active"])
        .set(snapshot.active);
    DB_POOL_CONNECTIONS
        .with_label_values(&[service, "max"])
        .set(snapshot.max);

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn published_for(service: &str) -> bool {
        prometheus::gather().iter().any(|family| {
            family.get_name() == "db_pool_connections"
                && family.get_metric().iter().any(|m| {
                    m.get_label()
                        .iter()
                        .any(|l| l.get_name() == "service" && l.get_value() == service)
                })
        })
    }

    #[tokio::test]
    async fn test_snapshot_does_not_publish() {
        let pool = PgPoolOptions::new()
            .max_connections(3)
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        let snapshot = PoolSnapshot::of(&pool);
        assert_eq!(snapshot, PoolSnapshot { idle: 0, active: 0, max: 3 });
        assert!(!published_for("snapshot-test"));

        let published = update_pool_metrics(&pool, "snapshot-test");
        assert_eq!(published, snapshot);
        assert!(published_for("snapshot-test"));
    }
}
