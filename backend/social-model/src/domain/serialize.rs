//! API payload projections
//!
//! Each entity maps to a flat, ordered view holding only scalar fields and
//! foreign-key ids. Timestamps render as RFC 3339 strings in UTC, or `null`
//! when the column is empty.

use super::models::{Comentario, Follower, Like, Post, User};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Projection of a loaded entity into its external payload
pub trait ApiPayload {
    type View: Serialize;

    fn serialize(&self) -> Self::View;

    /// Payload as a JSON object, keys in declaration order
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.serialize())
    }
}

/// ISO-8601 rendering that parses back to the same instant.
pub fn iso_timestamp(ts: Option<&DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Public view of a user. `password` and `is_active` are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub nombre: String,
    pub fecha_registro: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: i64,
    pub usuario_id: i64,
    pub imagen_url: String,
    pub descripcion: Option<String>,
    pub fecha_creacion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComentarioView {
    pub id: i64,
    pub contenido: String,
    pub fecha: Option<String>,
    pub usuario_id: i64,
    pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeView {
    pub id: i64,
    pub usuario_id: i64,
    pub post_id: i64,
    pub fecha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowerView {
    pub id: i64,
    pub user_id: i64,
    pub follower_id: i64,
    pub fecha: Option<String>,
}

impl ApiPayload for User {
    type View = UserView;

    fn serialize(&self) -> UserView {
        UserView {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            nombre: self.nombre.clone(),
            fecha_registro: iso_timestamp(self.fecha_registro.as_ref()),
        }
    }
}

impl ApiPayload for Post {
    type View = PostView;

    fn serialize(&self) -> PostView {
        PostView {
            id: self.id,
            usuario_id: self.usuario_id,
            imagen_url: self.imagen_url.clone(),
            descripcion: self.descripcion.clone(),
            fecha_creacion: iso_timestamp(self.fecha_creacion.as_ref()),
        }
    }
}

impl ApiPayload for Comentario {
    type View = ComentarioView;

    fn serialize(&self) -> ComentarioView {
        ComentarioView {
            id: self.id,
            contenido: self.contenido.clone(),
            fecha: iso_timestamp(self.fecha.as_ref()),
            usuario_id: self.usuario_id,
            post_id: self.post_id,
        }
    }
}

impl ApiPayload for Like {
    type View = LikeView;

    fn serialize(&self) -> LikeView {
        LikeView {
            id: self.id,
            usuario_id: self.usuario_id,
            post_id: self.post_id,
            fecha: iso_timestamp(self.fecha.as_ref()),
        }
    }
}

impl ApiPayload for Follower {
    type View = FollowerView;

    fn serialize(&self) -> FollowerView {
        FollowerView {
            id: self.id,
            user_id: self.user_id,
            follower_id: self.follower_id,
            fecha: iso_timestamp(self.fecha.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn keys(value: &serde_json::Value) -> Vec<&str> {
        value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap()
            + chrono::Duration::microseconds(123_456)
    }

    fn user() -> User {
        User {
            id: 7,
            email: "a@x.com".to_string(),
            password: "h".to_string(),
            is_active: true,
            username: "a".to_string(),
            nombre: "A".to_string(),
            fecha_registro: Some(instant()),
        }
    }

    #[test]
    fn test_user_payload_hides_credentials() {
        let json = user().to_json();
        assert_eq!(
            keys(&json),
            vec!["id", "email", "username", "nombre", "fecha_registro"]
        );
        assert!(json.get("password").is_none());
        assert!(json.get("is_active").is_none());
        assert_eq!(json["fecha_registro"], "2024-03-09T14:05:30.123456Z");
    }

    #[test]
    fn test_timestamp_round_trips() {
        let rendered = iso_timestamp(Some(&instant())).unwrap();
        let parsed = DateTime::parse_from_rfc3339(&rendered)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, instant());

        let whole = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            iso_timestamp(Some(&whole)).as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_absent_timestamps_render_null() {
        let mut u = user();
        u.fecha_registro = None;
        assert!(u.to_json()["fecha_registro"].is_null());

        let like = Like {
            id: 1,
            usuario_id: 2,
            post_id: 3,
            fecha: None,
        };
        let json = like.to_json();
        assert_eq!(keys(&json), vec!["id", "usuario_id", "post_id", "fecha"]);
        assert!(json["fecha"].is_null());
    }

    #[test]
    fn test_post_payload_shape() {
        let post = Post {
            id: 10,
            usuario_id: 7,
            imagen_url: "http://x/1.jpg".to_string(),
            descripcion: None,
            fecha_creacion: Some(instant()),
        };
        let json = post.to_json();
        assert_eq!(
            keys(&json),
            vec!["id", "usuario_id", "imagen_url", "descripcion", "fecha_creacion"]
        );
        assert!(json["descripcion"].is_null());
        assert_eq!(json["usuario_id"], 7);
    }

    #[test]
    fn test_comentario_payload_shape() {
        let comentario = Comentario {
            id: 4,
            contenido: "hola".to_string(),
            fecha: Some(instant()),
            usuario_id: 7,
            post_id: 10,
        };
        assert_eq!(
            keys(&comentario.to_json()),
            vec!["id", "contenido", "fecha", "usuario_id", "post_id"]
        );
    }

    #[test]
    fn test_follower_payload_shape() {
        let edge = Follower {
            id: 5,
            user_id: 7,
            follower_id: 8,
            fecha: Some(instant()),
        };
        let view = edge.serialize();
        assert_eq!(view.user_id, 7);
        assert_eq!(view.follower_id, 8);
        assert_eq!(
            keys(&edge.to_json()),
            vec!["id", "user_id", "follower_id", "fecha"]
        );
    }
}
