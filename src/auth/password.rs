// Password hashing and verification service

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::auth::error::AuthError;

/// Password service for hashing and verification
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Argon2id with the crate's default cost parameters
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Argon2id with explicit cost parameters
    ///
    /// `memory_kib` must be at least `8 * parallelism`.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            tracing::error!("Invalid Argon2 parameters: {}", e);
            AuthError::PasswordHashError
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Password hashing failed: {}", e);
                AuthError::PasswordHashError
            })
    }

    /// Verify a password against a stored PHC hash string
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            tracing::error!("Stored password hash is malformed: {}", e);
            AuthError::PasswordHashError
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_service() -> PasswordService {
        PasswordService::with_params(8, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = fast_service();
        let hash = service.hash_password("custpass").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("custpass"));
        assert!(service.verify_password("custpass", &hash).unwrap());
        assert!(!service.verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let service = fast_service();
        let first = service.hash_password("adminpass").unwrap();
        let second = service.hash_password("adminpass").unwrap();

        assert_ne!(first, second);
        assert!(service.verify_password("adminpass", &second).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let service = fast_service();
        assert!(matches!(
            service.verify_password("x", "plaintext"),
            Err(AuthError::PasswordHashError)
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(PasswordService::with_params(0, 0, 0).is_err());
    }
}
