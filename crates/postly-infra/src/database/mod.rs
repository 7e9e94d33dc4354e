//! MongoDB-backed implementations of the repository ports.

mod connections;
mod likes;
mod posts;
mod users;

pub use connections::{MongoConfig, connect};
pub use likes::MongoLikeRepository;
pub use posts::MongoPostRepository;
pub use users::MongoUserRepository;

use postly_core::error::RepoError;

/// Collection names.
pub(crate) const USERS: &str = "users";
pub(crate) const POSTS: &str = "posts";
pub(crate) const POST_LIKES: &str = "post_likes";

/// Map driver errors onto [`RepoError`], keeping duplicate-key violations
/// distinguishable so callers can treat them as business outcomes.
pub(crate) fn map_err(err: mongodb::error::Error) -> RepoError {
    if is_duplicate_key(&err) {
        RepoError::Constraint(err.to_string())
    } else {
        RepoError::Query(err.to_string())
    }
}

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == DUPLICATE_KEY,
        ErrorKind::Command(command) => command.code == DUPLICATE_KEY,
        _ => false,
    }
}
