//! Session token and password hashing ports.

use thiserror::Error;

/// Claims carried by a session token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: String,
    pub exp: i64,
}

/// Mints and validates signed session tokens.
pub trait TokenService: Send + Sync {
    /// Mint a session token asserting `user_id`.
    fn generate_token(&self, user_id: &str) -> Result<String, AuthError>;

    /// Validate a presented token and decode its claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// One-way password hashing.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Identity verification failed: {0}")]
    VerificationFailed(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
