//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Deserializer, Serialize};

use postly_core::domain::PostStatus;

/// Request to log in with a federated identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederatedLoginRequest {
    #[serde(default)]
    pub token: String,
}

/// Request to register with email and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Request to log in with email and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub status: Option<PostStatus>,
    pub cover_image: Option<String>,
}

/// Partial update of a post. Absent fields are left untouched; `coverImage`
/// distinguishes absent from an explicit null, which clears the image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_image: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Request to add a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Pagination and status filter for post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub status: Option<PostStatus>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Search query for published posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
