//! Mongo-backed like rows.

use async_trait::async_trait;
use mongodb::{Collection, Database, bson::doc};

use postly_core::domain::Like;
use postly_core::error::RepoError;
use postly_core::ports::{LikeInsert, LikeRepository};

use super::{POST_LIKES, map_err};

pub struct MongoLikeRepository {
    likes: Collection<Like>,
}

impl MongoLikeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            likes: db.collection(POST_LIKES),
        }
    }
}

#[async_trait]
impl LikeRepository for MongoLikeRepository {
    async fn insert(&self, like: &Like) -> Result<LikeInsert, RepoError> {
        match self.likes.insert_one(like).await {
            Ok(_) => Ok(LikeInsert::Inserted),
            Err(err) => match map_err(err) {
                // The unique index lost the race to another like of the same
                // pair; the row exists, which is all the caller wanted.
                RepoError::Constraint(_) => Ok(LikeInsert::AlreadyLiked),
                other => Err(other),
            },
        }
    }

    async fn remove(&self, post_id: &str, user_id: &str) -> Result<bool, RepoError> {
        let result = self
            .likes
            .delete_one(doc! { "postId": post_id, "userId": user_id })
            .await
            .map_err(map_err)?;

        Ok(result.deleted_count > 0)
    }

    async fn exists(&self, post_id: &str, user_id: &str) -> Result<bool, RepoError> {
        Ok(self
            .likes
            .find_one(doc! { "postId": post_id, "userId": user_id })
            .await
            .map_err(map_err)?
            .is_some())
    }

    async fn remove_all_for_post(&self, post_id: &str) -> Result<u64, RepoError> {
        let result = self
            .likes
            .delete_many(doc! { "postId": post_id })
            .await
            .map_err(map_err)?;

        Ok(result.deleted_count)
    }
}
