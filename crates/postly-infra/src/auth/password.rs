//! Argon2 password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use postly_core::ports::{AuthError, PasswordService};

/// Argon2-based password service. Hashes are salted PHC strings; the
/// plaintext is never stored.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("pw123").unwrap();
        assert!(service.verify("pw123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("pw123").unwrap();
        assert!(!service.verify("pw124", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = Argon2PasswordService::new();

        assert_ne!(service.hash("pw123").unwrap(), service.hash("pw123").unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let service = Argon2PasswordService::new();

        assert!(matches!(
            service.verify("pw123", "not-a-phc-string").unwrap_err(),
            AuthError::HashingError(_)
        ));
    }
}
