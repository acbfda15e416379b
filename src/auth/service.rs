// Authentication service - business logic layer

use chrono::Utc;
use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::{AuthResponse, Identity, Role, User, UserResponse},
    password::PasswordService,
    token::TokenService,
};
use crate::session::ShopState;

/// Authentication service coordinating all auth operations
///
/// Hashing and verification run outside the session lock; only the short
/// directory and identity updates take a `&mut ShopState`.
#[derive(Clone)]
pub struct AuthService {
    password_service: PasswordService,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(password_service: PasswordService, token_service: TokenService) -> Self {
        Self {
            password_service,
            token_service,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.token_service
    }

    /// Hash a password for storage
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        self.password_service.hash_password(password)
    }

    /// Build a pre-hashed account for seeding new sessions
    pub fn seed_account(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        Ok(User {
            username: username.to_string(),
            password_hash: self.hash_password(password)?,
            role,
            created_at: Utc::now(),
        })
    }

    /// Register a new customer in the session's directory
    pub fn register(
        &self,
        shop: &mut ShopState,
        username: &str,
        password_hash: String,
    ) -> Result<UserResponse, AuthError> {
        let user = shop
            .users
            .create_user(username, password_hash, Role::Customer)
            .map_err(|e| {
                tracing::warn!("Registration rejected for '{}': {}", username, e);
                e
            })?;

        tracing::info!("Registered customer '{}'", user.username);
        Ok(UserResponse::from(user))
    }

    /// Check a password against a looked-up account
    ///
    /// An unknown user and a wrong password are indistinguishable to callers.
    pub fn verify_credentials(
        &self,
        user: Option<User>,
        password: &str,
    ) -> Result<User, AuthError> {
        let user = user.ok_or(AuthError::InvalidCredentials)?;
        if self
            .password_service
            .verify_password(password, &user.password_hash)?
        {
            Ok(user)
        } else {
            tracing::debug!("Wrong password for '{}'", user.username);
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Make `user` the session's current identity and issue its token
    pub fn login(
        &self,
        shop: &mut ShopState,
        session_id: Uuid,
        user: &User,
    ) -> Result<AuthResponse, AuthError> {
        let access_token =
            self.token_service
                .generate_access_token(&user.username, session_id, user.role)?;
        let identity = Identity::new(user.username.clone(), user.role);

        if let Some(previous) = shop.identity.replace(identity.clone()) {
            tracing::debug!(
                "Session {} switched from '{}' to '{}'",
                session_id,
                previous.username,
                identity.username
            );
        }
        tracing::info!("'{}' logged in as {}", identity.username, identity.role);

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_service.access_token_duration(),
            user: identity,
        })
    }

    /// Clear the session's identity if it is still `identity`
    pub fn logout(&self, shop: &mut ShopState, identity: &Identity) -> bool {
        if shop.is_acting_as(identity) {
            shop.identity = None;
            tracing::info!("'{}' logged out", identity.username);
            true
        } else {
            false
        }
    }

    /// Get current user information
    pub fn current_user(
        &self,
        shop: &ShopState,
        identity: &Identity,
    ) -> Result<UserResponse, AuthError> {
        shop.users
            .find_by_username(&identity.username)
            .map(UserResponse::from)
            .ok_or(AuthError::SessionEnded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::UserDirectory;
    use crate::inventory::InventoryLedger;
    use rust_decimal_macros::dec;

    fn service() -> AuthService {
        AuthService::new(
            PasswordService::with_params(8, 1, 1).unwrap(),
            TokenService::new("test_secret", 3600),
        )
    }

    fn shop(service: &AuthService) -> ShopState {
        let users = UserDirectory::from_users([
            service.seed_account("admin", "adminpass", Role::Admin).unwrap(),
            service.seed_account("customer", "custpass", Role::Customer).unwrap(),
        ]);
        ShopState::new(users, InventoryLedger::standard(dec!(0.2)))
    }

    #[test]
    fn test_register_creates_customer() {
        let service = service();
        let mut shop = shop(&service);
        let hash = service.hash_password("pw").unwrap();

        let user = service.register(&mut shop, "alice", hash).unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Customer);
        assert_eq!(shop.users.len(), 3);
    }

    #[test]
    fn test_register_existing_username_fails() {
        let service = service();
        let mut shop = shop(&service);
        let hash = service.hash_password("other").unwrap();

        let result = service.register(&mut shop, "admin", hash);

        assert!(matches!(result, Err(AuthError::DuplicateUsername(_))));
        assert_eq!(
            shop.users.find_by_username("admin").unwrap().role,
            Role::Admin
        );
    }

    #[test]
    fn test_login_sets_identity() {
        let service = service();
        let mut shop = shop(&service);
        let session_id = Uuid::new_v4();

        let stored = shop.users.find_by_username("admin").cloned();
        let user = service.verify_credentials(stored, "adminpass").unwrap();
        let response = service.login(&mut shop, session_id, &user).unwrap();

        assert_eq!(response.user, Identity::new("admin", Role::Admin));
        assert_eq!(shop.identity, Some(Identity::new("admin", Role::Admin)));

        let claims = service
            .tokens()
            .validate_access_token(&response.access_token)
            .unwrap();
        assert_eq!(claims.sid, session_id);
    }

    #[test]
    fn test_bad_credentials() {
        let service = service();
        let shop = shop(&service);

        let stored = shop.users.find_by_username("customer").cloned();
        assert!(matches!(
            service.verify_credentials(stored, "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.verify_credentials(None, "custpass"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_logout_only_clears_matching_identity() {
        let service = service();
        let mut shop = shop(&service);
        let admin = Identity::new("admin", Role::Admin);
        shop.identity = Some(admin.clone());

        assert!(!service.logout(&mut shop, &Identity::new("customer", Role::Customer)));
        assert_eq!(shop.identity, Some(admin.clone()));

        assert!(service.logout(&mut shop, &admin));
        assert_eq!(shop.identity, None);
    }
}
