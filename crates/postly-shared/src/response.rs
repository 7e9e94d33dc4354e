//! Response bodies shared with the front-end.

use serde::{Deserialize, Serialize};

use postly_core::domain::UserProfile;

/// Body returned by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Pagination metadata for post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: u64,
}

impl Pagination {
    /// Envelope for one page; `totalPages` is `ceil(total / limit)`.
    pub fn new(total: u64, page: i64, limit: i64) -> Self {
        let total_pages = total.div_ceil(limit.max(1) as u64);
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// One page of posts plus its pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub posts: Vec<T>,
    pub pagination: Pagination,
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the like-status probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikedBody {
    pub liked: bool,
}

/// JSON error body: `{ "error": message }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
