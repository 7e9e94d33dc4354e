//! Federated identity verification port.

use async_trait::async_trait;

use super::auth::AuthError;

/// Identity asserted by the external provider after verifying its token.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Stable subject id, used as the `userId` of the upserted account.
    pub subject: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Verifies externally-issued identity tokens for federated login.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify `token` against the configured provider and audience.
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError>;
}
