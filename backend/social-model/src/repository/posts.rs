use crate::domain::models::{NewPost, Post};
use crate::error::{StoreError, StoreResult};
use sqlx::PgPool;
use tracing::debug;
use validator::Validate;

/// Repository for Post operations
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post. An unknown `usuario_id` yields `ReferentialIntegrity`.
    pub async fn create_post(&self, new_post: &NewPost) -> StoreResult<Post> {
        new_post.validate()?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO post (usuario_id, imagen_url, descripcion, fecha_creacion)
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            RETURNING id, usuario_id, imagen_url, descripcion, fecha_creacion
            "#,
        )
        .bind(new_post.usuario_id)
        .bind(&new_post.imagen_url)
        .bind(&new_post.descripcion)
        .bind(new_post.fecha_creacion)
        .fetch_one(&self.pool)
        .await?;

        debug!(post_id = post.id, usuario_id = post.usuario_id, "post created");
        Ok(post)
    }

    /// Get a single post by ID
    pub async fn get_post(&self, post_id: i64) -> StoreResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, usuario_id, imagen_url, descripcion, fecha_creacion
            FROM post
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn require_post(&self, post_id: i64) -> StoreResult<Post> {
        self.get_post(post_id)
            .await?
            .ok_or_else(|| StoreError::not_found("post", post_id))
    }

    /// Posts authored by a user, oldest first
    pub async fn list_user_posts(&self, usuario_id: i64) -> StoreResult<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, usuario_id, imagen_url, descripcion, fecha_creacion
            FROM post
            WHERE usuario_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Delete a post together with its comments and likes
    pub async fn delete_post(&self, post_id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM post
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        let deleted = result.rows_affected() > 0;
        debug!(post_id, deleted, "post delete");
        Ok(deleted)
    }
}
