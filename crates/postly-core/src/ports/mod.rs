//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod identity;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use identity::{IdentityVerifier, VerifiedIdentity};
pub use repository::{
    LikeInsert, LikeRepository, PostFilter, PostPage, PostRepository, UserRepository,
};
