//! Store handle shared by all data-access operations
//!
//! Built once at startup around a single pool and passed explicitly to
//! whatever needs the repositories.

use crate::error::StoreResult;
use crate::repository::{
    ComentarioRepository, FollowerRepository, LikeRepository, PostRepository, UserRepository,
};
use db_pool::{create_pool, DbConfig};
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

/// Schema for `user`, `post`, `comentario`, `like` and `follower`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct SocialStore {
    pool: PgPool,
    pub users: UserRepository,
    pub posts: PostRepository,
    pub comentarios: ComentarioRepository,
    pub likes: LikeRepository,
    pub followers: FollowerRepository,
}

impl SocialStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            comentarios: ComentarioRepository::new(pool.clone()),
            likes: LikeRepository::new(pool.clone()),
            followers: FollowerRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create the pool described by `config` and wrap it
    pub async fn connect(config: DbConfig) -> StoreResult<Self> {
        config.log_config();
        let pool = create_pool(config).await?;
        Ok(Self::new(pool))
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        info!(
            migrations = MIGRATOR.iter().count(),
            "Applying social schema migrations"
        );
        MIGRATOR.run(&self.pool).await?;
        info!("Social schema is up to date");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
