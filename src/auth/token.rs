// JWT token generation and validation service

use crate::auth::{error::AuthError, models::Role};
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub sid: Uuid,   // shop session the login belongs to
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

/// Token service for JWT operations
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    access_token_duration: i64, // in seconds
}

impl TokenService {
    pub fn new(secret: impl Into<String>, access_token_duration: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_duration,
        }
    }

    pub fn access_token_duration(&self) -> i64 {
        self.access_token_duration
    }

    /// Generate an access token bound to a session
    pub fn generate_access_token(
        &self,
        username: &str,
        session_id: Uuid,
        role: Role,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: username.to_string(),
            sid: session_id,
            role,
            iat: now,
            exp: now + self.access_token_duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate an access token and return its claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes", 3600)
    }

    #[test]
    fn test_access_token_expiration_matches_duration() {
        let service = test_token_service();
        let token = service
            .generate_access_token("customer", Uuid::new_v4(), Role::Customer)
            .unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_claims_carry_identity_and_session() {
        let service = test_token_service();
        let session_id = Uuid::new_v4();

        let token = service
            .generate_access_token("admin", session_id, Role::Admin)
            .unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.sid, session_id);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.validate_access_token("").is_err());
        assert!(service.validate_access_token("not.a.token").is_err());
        assert!(service
            .validate_access_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn test_token_signature_verification() {
        let service1 = TokenService::new("secret1", 3600);
        let service2 = TokenService::new("secret2", 3600);

        let token = service1
            .generate_access_token("customer", Uuid::new_v4(), Role::Customer)
            .unwrap();

        assert!(service1.validate_access_token(&token).is_ok());
        assert!(matches!(
            service2.validate_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        // Past the default 60s validation leeway
        let service = TokenService::new("secret", -500);
        let token = service
            .generate_access_token("customer", Uuid::new_v4(), Role::Customer)
            .unwrap();

        assert!(matches!(
            service.validate_access_token(&token),
            Err(AuthError::ExpiredToken)
        ));
    }

    proptest! {
        #[test]
        fn prop_claims_round_trip_identity(
            username in "[a-z]{3,12}",
            is_admin in any::<bool>()
        ) {
            let service = test_token_service();
            let role = if is_admin { Role::Admin } else { Role::Customer };
            let session_id = Uuid::new_v4();

            let token = service.generate_access_token(&username, session_id, role)?;
            let claims = service.validate_access_token(&token)?;

            prop_assert_eq!(claims.sub, username);
            prop_assert_eq!(claims.sid, session_id);
            prop_assert_eq!(claims.role, role);
        }

        #[test]
        fn prop_malformed_tokens_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.validate_access_token(&malformed).is_err());
        }
    }
}
