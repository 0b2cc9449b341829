use crate::domain::models::{NewUser, User};
use crate::error::{StoreError, StoreResult};
use sqlx::PgPool;
use tracing::debug;
use validator::Validate;

/// Repository for User operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user.
    ///
    /// Fails with `ConstraintViolation` when the email or username is taken
    /// or a required field is empty.
    pub async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        new_user.validate()?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (email, password, is_active, username, nombre, fecha_registro)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
            RETURNING id, email, password, is_active, username, nombre, fecha_registro
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(new_user.is_active)
        .bind(&new_user.username)
        .bind(&new_user.nombre)
        .bind(new_user.fecha_registro)
        .fetch_one(&self.pool)
        .await?;

        debug!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Get a single user by ID
    pub async fn get_user(&self, user_id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, username, nombre, fecha_registro
            FROM "user"
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Like `get_user`, but a missing row is an error
    pub async fn require_user(&self, user_id: i64) -> StoreResult<User> {
        self.get_user(user_id)
            .await?
            .ok_or_else(|| StoreError::not_found("user", user_id))
    }

    pub async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, username, nombre, fecha_registro
            FROM "user"
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, username, nombre, fecha_registro
            FROM "user"
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete a user. Posts, comments, likes and follow edges in both
    /// directions go with it through the schema's cascading foreign keys.
    /// Returns false if no such user existed.
    pub async fn delete_user(&self, user_id: i64) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM "user"
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        let deleted = result.rows_affected() > 0;
        debug!(user_id, deleted, "user delete");
        Ok(deleted)
    }
}
