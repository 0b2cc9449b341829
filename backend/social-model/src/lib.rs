//! Persistent data model for users, image posts, comments, likes and follows.

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod store;

pub use domain::ApiPayload;
pub use error::{StoreError, StoreResult};
pub use store::{SocialStore, MIGRATOR};
