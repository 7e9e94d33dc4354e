//! Mongo-backed post store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, bson,
    bson::{Document, doc},
    options::ReturnDocument,
};

use postly_core::domain::{Comment, Post, PostPatch};
use postly_core::error::RepoError;
use postly_core::ports::{PostFilter, PostPage, PostRepository};

use super::{POSTS, map_err};

pub struct MongoPostRepository {
    posts: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            posts: db.collection(POSTS),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), RepoError> {
        self.posts.insert_one(post).await.map_err(map_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        self.posts
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_err)
    }

    async fn fetch_and_record_view(&self, id: &str) -> Result<Option<Post>, RepoError> {
        self.posts
            .find_one_and_update(doc! { "_id": id }, doc! { "$inc": { "views": 1 } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_err)
    }

    async fn fetch_by_slug_and_record_view(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        self.posts
            .find_one_and_update(doc! { "slug": slug }, doc! { "$inc": { "views": 1 } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_err)
    }

    async fn slug_taken(&self, slug: &str, exclude_id: Option<&str>) -> Result<bool, RepoError> {
        let mut filter = doc! { "slug": slug };
        if let Some(id) = exclude_id {
            filter.insert("_id", doc! { "$ne": id });
        }

        Ok(self
            .posts
            .find_one(filter)
            .await
            .map_err(map_err)?
            .is_some())
    }

    async fn page(
        &self,
        filter: &PostFilter,
        page: i64,
        limit: i64,
    ) -> Result<PostPage, RepoError> {
        let filter = filter_doc(filter);

        let total = self
            .posts
            .count_documents(filter.clone())
            .await
            .map_err(map_err)?;

        let skip = (page - 1) * limit;
        let posts = self
            .posts
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .skip(skip as u64)
            .limit(limit)
            .await
            .map_err(map_err)?
            .try_collect()
            .await
            .map_err(map_err)?;

        Ok(PostPage { posts, total })
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let filter = doc! {
            "$or": [
                { "title": { "$regex": query, "$options": "i" } },
                { "content": { "$regex": query, "$options": "i" } },
            ],
            "status": "published",
        };

        self.posts
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(map_err)?
            .try_collect()
            .await
            .map_err(map_err)
    }

    async fn apply_patch(&self, id: &str, patch: &PostPatch) -> Result<Option<Post>, RepoError> {
        let fields = bson::to_document(patch).map_err(|e| RepoError::Query(e.to_string()))?;

        self.posts
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_err)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let result = self
            .posts
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_err)?;

        Ok(result.deleted_count > 0)
    }

    async fn push_comment(&self, post_id: &str, comment: &Comment) -> Result<bool, RepoError> {
        let comment = bson::to_document(comment).map_err(|e| RepoError::Query(e.to_string()))?;

        let result = self
            .posts
            .update_one(
                doc! { "_id": post_id },
                doc! { "$push": { "comments": comment } },
            )
            .await
            .map_err(map_err)?;

        Ok(result.matched_count > 0)
    }

    async fn pull_comment(&self, post_id: &str, comment_id: &str) -> Result<bool, RepoError> {
        let result = self
            .posts
            .update_one(
                doc! { "_id": post_id },
                doc! { "$pull": { "comments": { "_id": comment_id } } },
            )
            .await
            .map_err(map_err)?;

        Ok(result.modified_count > 0)
    }

    async fn inc_likes(&self, post_id: &str, delta: i64) -> Result<(), RepoError> {
        self.posts
            .update_one(
                doc! { "_id": post_id },
                doc! { "$inc": { "likes": delta } },
            )
            .await
            .map_err(map_err)?;

        Ok(())
    }
}

fn filter_doc(filter: &PostFilter) -> Document {
    let mut doc = Document::new();
    if let Some(status) = filter.status {
        doc.insert("status", status.as_str());
    }
    if let Some(author_id) = &filter.author_id {
        doc.insert("author.userId", author_id.as_str());
    }
    doc
}
