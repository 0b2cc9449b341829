use crate::domain::models::{Like, NewLike};
use crate::error::StoreResult;
use sqlx::PgPool;
use tracing::debug;

/// Repository for Like operations
#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a like. Every call inserts a new row; the same user may like
    /// the same post more than once.
    pub async fn create_like(&self, new_like: &NewLike) -> StoreResult<Like> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO "like" (usuario_id, post_id, fecha)
            VALUES ($1, $2, COALESCE($3, NOW()))
            RETURNING id, usuario_id, post_id, fecha
            "#,
        )
        .bind(new_like.usuario_id)
        .bind(new_like.post_id)
        .bind(new_like.fecha)
        .fetch_one(&self.pool)
        .await?;

        debug!(like_id = like.id, post_id = like.post_id, "like created");
        Ok(like)
    }

    pub async fn get_like(&self, like_id: i64) -> StoreResult<Option<Like>> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, usuario_id, post_id, fecha
            FROM "like"
            WHERE id = $1
            "#,
        )
        .bind(like_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(like)
    }

    /// Likes on a post, oldest first
    pub async fn list_post_likes(&self, post_id: i64) -> StoreResult<Vec<Like>> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, usuario_id, post_id, fecha
            FROM "like"
            WHERE post_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }

    /// Likes given by a user, oldest first
    pub async fn list_user_likes(&self, usuario_id: i64) -> StoreResult<Vec<Like>> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, usuario_id, post_id, fecha
            FROM "like"
            WHERE usuario_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }

    /// Get like count for a post
    pub async fn count_post_likes(&self, post_id: i64) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM "like"
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn delete_like(&self, like_id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM "like"
            WHERE id = $1
            "#,
        )
        .bind(like_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
