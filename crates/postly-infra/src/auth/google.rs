//! Google ID-token verification for federated login.
//!
//! The tokeninfo endpoint validates the token's signature and expiry on
//! Google's side; audience is checked here against the configured OAuth
//! client id.

use async_trait::async_trait;
use serde::Deserialize;

use postly_core::ports::{AuthError, IdentityVerifier, VerifiedIdentity};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Verifies Google-issued ID tokens.
pub struct GoogleIdentityVerifier {
    client: reqwest::Client,
    client_id: String,
}

impl GoogleIdentityVerifier {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
        }
    }
}

/// Fields of the tokeninfo response this service consumes.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    sub: String,
    aud: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl TokenInfo {
    fn into_identity(self, client_id: &str) -> Result<VerifiedIdentity, AuthError> {
        if self.aud != client_id {
            return Err(AuthError::VerificationFailed(
                "token audience mismatch".to_string(),
            ));
        }

        Ok(VerifiedIdentity {
            subject: self.sub,
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            picture: self.picture,
        })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "identity provider rejected the token");
            return Err(AuthError::VerificationFailed(
                "identity provider rejected the token".to_string(),
            ));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;

        info.into_identity(&self.client_id)
    }
}
