use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::user::UserProfile;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

/// Post entity - one document per post in the `posts` collection.
///
/// The author is an embedded snapshot taken at creation time; later profile
/// changes do not rewrite existing posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: UserProfile,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: PostStatus,
    pub read_time: i64,
    pub views: i64,
    pub likes: i64,
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Post {
    /// Create a new post. The slug is chosen by the caller, which is where
    /// the uniqueness probe against the store happens.
    pub fn new(
        author: UserProfile,
        title: String,
        content: String,
        status: PostStatus,
        cover_image: Option<String>,
        slug: String,
    ) -> Self {
        let now = Utc::now();
        let read_time = read_time(&content);
        Self {
            id: ObjectId::new().to_hex(),
            title,
            content,
            author,
            slug,
            created_at: now,
            updated_at: now,
            status,
            read_time,
            views: 0,
            likes: 0,
            comments: Vec::new(),
            cover_image,
        }
    }
}

/// Partial update of an owned post. `None` leaves a field untouched;
/// `cover_image` uses a nested Option so an explicit null clears the image.
/// `updated_at` is stamped on construction and always written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl PostPatch {
    /// Empty patch; applying it still bumps `updatedAt`.
    pub fn new() -> Self {
        Self {
            title: None,
            slug: None,
            content: None,
            read_time: None,
            status: None,
            cover_image: None,
            updated_at: Utc::now(),
        }
    }
}

impl Default for PostPatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a URL-safe slug from a title: lowercase, spaces to hyphens,
/// everything outside `[a-z0-9-]` stripped.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            'a'..='z' | '0'..='9' | '-' => Some(c),
            _ => None,
        })
        .collect()
}

/// Collision suffix for a taken slug: the last six characters of a fresh
/// ObjectId hex.
pub fn unique_suffix() -> String {
    let hex = ObjectId::new().to_hex();
    hex[hex.len() - 6..].to_string()
}

/// Estimated reading time in whole minutes at 200 words per minute, never
/// below one.
pub fn read_time(content: &str) -> i64 {
    let words = content.split_whitespace().count();
    ((words as f64 / 200.0).round() as i64).max(1)
}
