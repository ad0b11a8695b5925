//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::policy::{ExactMatch, OwnershipPolicy};
use board_core::ports::{CommentRepository, CounterStore, LikeRepository, PostRepository};
use board_core::service::{CommentService, LikeService, PostService};
use board_infra::counter::InMemoryCounterStore;
use board_infra::memory::{
    InMemoryCommentRepository, InMemoryLikeRepository, InMemoryPostRepository, InMemoryStore,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub likes: Arc<LikeService>,
}

struct Repositories {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
}

fn in_memory_repositories() -> Repositories {
    let store = Arc::new(InMemoryStore::new());
    Repositories {
        posts: Arc::new(InMemoryPostRepository::new(store.clone())),
        comments: Arc::new(InMemoryCommentRepository::new(store.clone())),
        likes: Arc::new(InMemoryLikeRepository::new(store)),
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repos = Self::build_repositories(config).await;
        let counter = Self::build_counter(config).await;
        let policy: Arc<dyn OwnershipPolicy> = Arc::new(ExactMatch);

        let likes = Arc::new(LikeService::new(
            repos.likes.clone(),
            repos.posts.clone(),
            counter,
        ));
        let posts = Arc::new(PostService::new(
            repos.posts.clone(),
            likes.clone(),
            policy.clone(),
        ));
        let comments = Arc::new(CommentService::new(repos.comments, repos.posts, policy));

        tracing::info!("Application state initialized");

        Self {
            posts,
            comments,
            likes,
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_repositories(config: &AppConfig) -> Repositories {
        use board_infra::database::{self, DatabaseConfig};

        let Some(url) = config.database_url.clone() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return in_memory_repositories();
        };

        let db_config = DatabaseConfig {
            url,
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
        };

        match database::connect(&db_config).await {
            Ok(conn) => Repositories {
                posts: Arc::new(database::PostgresPostRepository::new(conn.clone())),
                comments: Arc::new(database::PostgresCommentRepository::new(conn.clone())),
                likes: Arc::new(database::PostgresLikeRepository::new(conn)),
            },
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                in_memory_repositories()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repositories(_config: &AppConfig) -> Repositories {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        in_memory_repositories()
    }

    #[cfg(feature = "redis")]
    async fn build_counter(config: &AppConfig) -> Arc<dyn CounterStore> {
        use board_infra::counter::{RedisConfig, RedisCounterStore};

        let Some(url) = config.redis_url.clone() else {
            tracing::warn!("REDIS_URL not set. Using in-memory like counter.");
            return Arc::new(InMemoryCounterStore::new());
        };

        let redis_config = RedisConfig {
            url,
            ..RedisConfig::default()
        };
        match RedisCounterStore::new(redis_config).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to Redis: {}. Using in-memory like counter.",
                    e
                );
                Arc::new(InMemoryCounterStore::new())
            }
        }
    }

    #[cfg(not(feature = "redis"))]
    async fn build_counter(_config: &AppConfig) -> Arc<dyn CounterStore> {
        tracing::info!("Running without redis feature - using in-memory like counter");
        Arc::new(InMemoryCounterStore::new())
    }
}
