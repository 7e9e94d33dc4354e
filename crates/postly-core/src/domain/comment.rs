use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// Author snapshot embedded in a comment. Unlike the post author it carries
/// no email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl From<&UserProfile> for CommentAuthor {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            name: profile.name.clone(),
            profile_picture: profile.profile_picture.clone(),
        }
    }
}

/// Comment embedded in its parent post's `comments` array. Ids are unique
/// within the post, not globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub author: CommentAuthor,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
}

impl Comment {
    pub fn new(author: CommentAuthor, content: String) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            content,
            author,
            created_at: Utc::now(),
            likes: 0,
        }
    }
}
