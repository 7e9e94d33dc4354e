//! Domain entities - the core business objects.

mod comment;
mod like;
mod post;
mod user;

pub use comment::{Comment, CommentAuthor};
pub use like::Like;
pub use post::{Post, PostPatch, PostStatus, read_time, slugify, unique_suffix};
pub use user::{User, UserProfile};

/// True when `id` parses as a 24-hex-character ObjectId.
///
/// Post and comment ids are generated this way; anything shaped differently
/// can never name a stored document.
pub fn valid_object_id(id: &str) -> bool {
    bson::oid::ObjectId::parse_str(id).is_ok()
}
