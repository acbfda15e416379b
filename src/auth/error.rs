// Errors raised while registering, logging in or checking a bearer token

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

use crate::auth::models::Role;
use crate::session::SessionError;

/// Failure of an auth step, rendered as `{"error": ...}`
#[derive(Debug)]
pub enum AuthError {
    ValidationError(String),
    InvalidCredentials,
    InvalidToken,
    ExpiredToken,
    MissingToken,
    /// Token is well formed but its session no longer acts as this user
    SessionEnded,
    DuplicateUsername(String),
    PasswordHashError,
    TokenGenerationError(String),
    Session(SessionError),

    /// Logged in, but with the wrong role
    InsufficientPermissions {
        required: Role,
        actual: Role,
    },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::InvalidToken => write!(f, "Invalid token"),
            AuthError::ExpiredToken => write!(f, "Token has expired"),
            AuthError::MissingToken => write!(f, "Missing authentication token"),
            AuthError::SessionEnded => write!(f, "Not logged in"),
            AuthError::DuplicateUsername(name) => write!(f, "Username '{}' already exists", name),
            AuthError::PasswordHashError => write!(f, "Password hashing error"),
            AuthError::TokenGenerationError(msg) => write!(f, "Token generation error: {}", msg),
            AuthError::Session(err) => write!(f, "{}", err),
            AuthError::InsufficientPermissions { required, actual } => {
                write!(
                    f,
                    "Insufficient permissions: required role '{}', but user has role '{}'",
                    required, actual
                )
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::LoggedOut(_) => AuthError::SessionEnded,
            other => AuthError::Session(other),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::InvalidToken => warn!("Invalid token attempt"),
            AuthError::ExpiredToken => warn!("Expired token attempt"),
            AuthError::MissingToken => warn!("Missing token in request"),
            AuthError::PasswordHashError => error!("Password hashing error"),
            AuthError::TokenGenerationError(msg) => error!("Token generation error: {}", msg),
            AuthError::InsufficientPermissions { required, actual } => warn!(
                "Authorization failed: required role '{}', user has role '{}'",
                required, actual
            ),
            _ => {}
        }

        let body = Json(json!({
            "error": self.error_message(),
        }));

        (self.status_code(), body).into_response()
    }
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::SessionEnded => StatusCode::UNAUTHORIZED,
            AuthError::DuplicateUsername(_) => StatusCode::CONFLICT,
            AuthError::PasswordHashError => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Session(_) => StatusCode::NOT_FOUND,
            AuthError::InsufficientPermissions { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// Client-facing message; internal failures are not described
    pub fn error_message(&self) -> String {
        match self {
            AuthError::ValidationError(msg) => msg.clone(),
            AuthError::PasswordHashError | AuthError::TokenGenerationError(_) => {
                "Internal server error".to_string()
            }
            AuthError::InsufficientPermissions { required, .. } => {
                format!("Insufficient permissions: required role '{}'", required)
            }
            other => other.to_string(),
        }
    }
}
