//! Application state - shared across all handlers.

use std::sync::Arc;

use postly_core::error::RepoError;
use postly_core::ports::{LikeRepository, PostRepository, UserRepository};
use postly_infra::database::{
    self, MongoConfig, MongoLikeRepository, MongoPostRepository, MongoUserRepository,
};

/// Shared application state: the injected store handles. Built once at
/// startup and cloned per worker.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

impl AppState {
    /// Connect to the document store and build the repositories over it.
    pub async fn new(config: &MongoConfig) -> Result<Self, RepoError> {
        let db = database::connect(config).await?;

        Ok(Self {
            users: Arc::new(MongoUserRepository::new(&db)),
            posts: Arc::new(MongoPostRepository::new(&db)),
            likes: Arc::new(MongoLikeRepository::new(&db)),
        })
    }

    /// State over explicit repository implementations; the tests use this
    /// with in-memory stores.
    #[cfg(test)]
    pub fn with_repositories(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            users,
            posts,
            likes,
        }
    }
}
