//! Repository ports over the document collections.

use async_trait::async_trait;

use crate::domain::{Comment, Like, Post, PostPatch, PostStatus, User};
use crate::error::RepoError;

/// Filter for paginated post listings.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub author_id: Option<String>,
}

/// One page of posts plus the total document count for the filter.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: u64,
}

/// Outcome of inserting a like row guarded by the unique (postId, userId)
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeInsert {
    Inserted,
    AlreadyLiked,
}

/// User directory over the `users` collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert or refresh the profile keyed by `userId` (federated login path).
    async fn upsert(&self, user: &User) -> Result<(), RepoError>;

    async fn insert(&self, user: &User) -> Result<(), RepoError>;
}

/// Post documents in the `posts` collection, including their embedded
/// comments and the denormalized like counter.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: &Post) -> Result<(), RepoError>;

    /// Fetch without side effects.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Fetch by id, atomically incrementing `views`; the returned post
    /// already reflects the increment.
    async fn fetch_and_record_view(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Fetch by slug, atomically incrementing `views`.
    async fn fetch_by_slug_and_record_view(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// True if a post other than `exclude_id` already owns `slug`.
    async fn slug_taken(&self, slug: &str, exclude_id: Option<&str>) -> Result<bool, RepoError>;

    /// One page of posts matching `filter`, newest first.
    async fn page(&self, filter: &PostFilter, page: i64, limit: i64)
    -> Result<PostPage, RepoError>;

    /// Case-insensitive substring match on title or content of published
    /// posts, newest first.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError>;

    /// Apply a partial update and return the updated post.
    async fn apply_patch(&self, id: &str, patch: &PostPatch) -> Result<Option<Post>, RepoError>;

    /// Remove the post document. Cascading the like rows is the caller's job.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;

    /// Append a comment; false when the post does not exist.
    async fn push_comment(&self, post_id: &str, comment: &Comment) -> Result<bool, RepoError>;

    /// Remove a comment by id; false when nothing matched.
    async fn pull_comment(&self, post_id: &str, comment_id: &str) -> Result<bool, RepoError>;

    /// Adjust the denormalized like counter by `delta`.
    async fn inc_likes(&self, post_id: &str, delta: i64) -> Result<(), RepoError>;
}

/// Like rows in the `post_likes` collection.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a row; the unique index decides the outcome under concurrency.
    async fn insert(&self, like: &Like) -> Result<LikeInsert, RepoError>;

    async fn remove(&self, post_id: &str, user_id: &str) -> Result<bool, RepoError>;

    async fn exists(&self, post_id: &str, user_id: &str) -> Result<bool, RepoError>;

    /// Cascade used by post deletion; returns the number of rows removed.
    async fn remove_all_for_post(&self, post_id: &str) -> Result<u64, RepoError>;
}
