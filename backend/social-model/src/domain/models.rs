use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use validator::Validate;

/// User entity - an account that owns posts, comments, likes and follow edges
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Stored credential. Never leaves the data layer through `serialize`.
    pub password: String,
    pub is_active: bool,
    pub username: String,
    pub nombre: String,
    pub fecha_registro: Option<DateTime<Utc>>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .field("username", &self.username)
            .field("nombre", &self.nombre)
            .field("fecha_registro", &self.fecha_registro)
            .finish()
    }
}

/// Post entity - an image published by a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub usuario_id: i64,
    pub imagen_url: String,
    pub descripcion: Option<String>,
    pub fecha_creacion: Option<DateTime<Utc>>,
}

/// Comentario entity - a comment left by a user on a post
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comentario {
    pub id: i64,
    pub contenido: String,
    pub fecha: Option<DateTime<Utc>>,
    pub usuario_id: i64,
    pub post_id: i64,
}

/// Like entity - a user liking a post
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Like {
    pub id: i64,
    pub usuario_id: i64,
    pub post_id: i64,
    pub fecha: Option<DateTime<Utc>>,
}

/// Follower entity - directed edge: `follower_id` follows `user_id`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Follower {
    pub id: i64,
    /// The followed user
    pub user_id: i64,
    /// The user doing the following
    pub follower_id: i64,
    pub fecha: Option<DateTime<Utc>>,
}

// ============================================================================
// Insert payloads
// ============================================================================

/// Fields required to register a user. `fecha_registro` defaults to now.
/// Only the column lengths are checked; any other string is stored as given.
#[derive(Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(max = 120))]
    pub email: String,
    #[validate(length(max = 50))]
    pub username: String,
    pub password: String,
    pub is_active: bool,
    #[validate(length(max = 100))]
    pub nombre: String,
    #[serde(default)]
    pub fecha_registro: Option<DateTime<Utc>>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .field("nombre", &self.nombre)
            .field("fecha_registro", &self.fecha_registro)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPost {
    pub usuario_id: i64,
    #[validate(length(max = 255))]
    pub imagen_url: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub fecha_creacion: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComentario {
    pub contenido: String,
    pub usuario_id: i64,
    pub post_id: i64,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLike {
    pub usuario_id: i64,
    pub post_id: i64,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFollower {
    pub user_id: i64,
    pub follower_id: i64,
    #[serde(default)]
    pub fecha: Option<DateTime<Utc>>,
}
