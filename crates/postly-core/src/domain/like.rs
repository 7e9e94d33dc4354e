use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Like relation - one row per (post, user) pair in `post_likes`. Existence
/// of the row is the source of truth; `Post.likes` is a denormalized counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub post_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(post_id: String, user_id: String) -> Self {
        Self {
            post_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
