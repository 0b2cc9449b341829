use crate::domain::models::{Follower, NewFollower};
use crate::error::StoreResult;
use sqlx::PgPool;
use tracing::debug;

/// Repository for follow edges
#[derive(Clone)]
pub struct FollowerRepository {
    pool: PgPool,
}

impl FollowerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a follow edge (`follower_id` follows `user_id`). Repeated
    /// edges and self-follows are stored as given.
    pub async fn create_follower(&self, new_follower: &NewFollower) -> StoreResult<Follower> {
        let edge = sqlx::query_as::<_, Follower>(
            r#"
            INSERT INTO follower (user_id, follower_id, fecha)
            VALUES ($1, $2, COALESCE($3, NOW()))
            RETURNING id, user_id, follower_id, fecha
            "#,
        )
        .bind(new_follower.user_id)
        .bind(new_follower.follower_id)
        .bind(new_follower.fecha)
        .fetch_one(&self.pool)
        .await?;

        debug!(
            user_id = edge.user_id,
            follower_id = edge.follower_id,
            "follow edge created"
        );
        Ok(edge)
    }

    pub async fn get_follower(&self, edge_id: i64) -> StoreResult<Option<Follower>> {
        let edge = sqlx::query_as::<_, Follower>(
            r#"
            SELECT id, user_id, follower_id, fecha
            FROM follower
            WHERE id = $1
            "#,
        )
        .bind(edge_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(edge)
    }

    /// Edges pointing at `user_id`, i.e. the accounts following that user
    pub async fn list_followers(&self, user_id: i64) -> StoreResult<Vec<Follower>> {
        let edges = sqlx::query_as::<_, Follower>(
            r#"
            SELECT id, user_id, follower_id, fecha
            FROM follower
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(edges)
    }

    /// Edges starting at `follower_id`, i.e. the accounts that user follows
    pub async fn list_following(&self, follower_id: i64) -> StoreResult<Vec<Follower>> {
        let edges = sqlx::query_as::<_, Follower>(
            r#"
            SELECT id, user_id, follower_id, fecha
            FROM follower
            WHERE follower_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(edges)
    }

    pub async fn delete_follower(&self, edge_id: i64) -> StoreResult<bool> {
        let affected = sqlx::query(
            r#"
            DELETE FROM follower
            WHERE id = $1
            "#,
        )
        .bind(edge_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }
}
