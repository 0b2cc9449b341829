use crate::domain::models::{Comentario, NewComentario};
use crate::error::StoreResult;
use sqlx::PgPool;
use tracing::debug;

/// Repository for Comentario operations
#[derive(Clone)]
pub struct ComentarioRepository {
    pool: PgPool,
}

impl ComentarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new comment on a post
    pub async fn create_comentario(&self, new_comentario: &NewComentario) -> StoreResult<Comentario> {
        let comentario = sqlx::query_as::<_, Comentario>(
            r#"
            INSERT INTO comentario (contenido, fecha, usuario_id, post_id)
            VALUES ($1, COALESCE($2, NOW()), $3, $4)
            RETURNING id, contenido, fecha, usuario_id, post_id
            "#,
        )
        .bind(&new_comentario.contenido)
        .bind(new_comentario.fecha)
        .bind(new_comentario.usuario_id)
        .bind(new_comentario.post_id)
        .fetch_one(&self.pool)
        .await?;

        debug!(
            comentario_id = comentario.id,
            post_id = comentario.post_id,
            "comentario created"
        );
        Ok(comentario)
    }

    /// Get a single comment by ID
    pub async fn get_comentario(&self, comentario_id: i64) -> StoreResult<Option<Comentario>> {
        let comentario = sqlx::query_as::<_, Comentario>(
            r#"
            SELECT id, contenido, fecha, usuario_id, post_id
            FROM comentario
            WHERE id = $1
            "#,
        )
        .bind(comentario_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comentario)
    }

    /// Comments on a post, oldest first
    pub async fn list_post_comentarios(&self, post_id: i64) -> StoreResult<Vec<Comentario>> {
        let comentarios = sqlx::query_as::<_, Comentario>(
            r#"
            SELECT id, contenido, fecha, usuario_id, post_id
            FROM comentario
            WHERE post_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comentarios)
    }

    /// Comments written by a user, oldest first
    pub async fn list_user_comentarios(&self, usuario_id: i64) -> StoreResult<Vec<Comentario>> {
        let comentarios = sqlx::query_as::<_, Comentario>(
            r#"
            SELECT id, contenido, fecha, usuario_id, post_id
            FROM comentario
            WHERE usuario_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comentarios)
    }

    pub async fn delete_comentario(&self, comentario_id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM comentario
            WHERE id = $1
            "#,
        )
        .bind(comentario_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
