// Authentication extractors for protected routes

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{
    error::AuthError,
    models::{Identity, Role},
};
use crate::state::AppState;

/// Authenticated user extractor for protected routes
///
/// A request is authenticated when its bearer token verifies and the
/// token's session is still acting as the token's user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub session_id: Uuid,
    pub identity: Identity,
}

impl AuthenticatedUser {
    pub fn username(&self) -> &str {
        &self.identity.username
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }

    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }

    /// Fail unless the user holds `required`
    pub fn require_role(&self, required: Role) -> Result<(), AuthError> {
        if self.identity.role == required {
            Ok(())
        } else {
            warn!(
                "Authorization failed: user={}, required_role={}, actual_role={}",
                self.identity.username, required, self.identity.role
            );
            Err(AuthError::InsufficientPermissions {
                required,
                actual: self.identity.role,
            })
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!(
            "Authorization header missing 'Bearer ' prefix for endpoint: {}",
            parts.uri.path()
        );
        AuthError::InvalidToken
    })
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.auth_service.tokens().validate_access_token(token)?;
        let identity = Identity::new(claims.sub, claims.role);

        let active = state
            .sessions
            .read(claims.sid, |shop| -> Result<bool, AuthError> {
                Ok(shop.is_acting_as(&identity))
            })
            .await?;

        if !active {
            debug!(
                "Token for '{}' no longer matches session {}",
                identity.username, claims.sid
            );
            return Err(AuthError::SessionEnded);
        }

        Ok(AuthenticatedUser {
            session_id: claims.sid,
            identity,
        })
    }
}

/// Extractor that only admits admins
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        user.require_role(Role::Admin)?;
        debug!(
            "Admin access granted: user={}, endpoint={}",
            user.username(),
            parts.uri.path()
        );
        Ok(AdminUser(user))
    }
}
