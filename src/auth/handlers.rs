// HTTP handlers for authentication endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse},
};
use crate::state::AppState;

/// Register a new customer in a session
/// POST /api/sessions/{session_id}/register
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/register",
    params(("session_id" = Uuid, Path, description = "Session id")),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Customer registered", body = UserResponse),
        (status = 400, description = "Missing username or password"),
        (status = 404, description = "No such session"),
        (status = 409, description = "Username already exists")
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let password_hash = state.auth_service.hash_password(&request.password)?;
    let user = state
        .sessions
        .write(session_id, |shop| {
            state
                .auth_service
                .register(shop, &request.username, password_hash)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in to a session
/// POST /api/sessions/{session_id}/login
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/login",
    params(("session_id" = Uuid, Path, description = "Session id")),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid username or password"),
        (status = 404, description = "No such session")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let stored = state
        .sessions
        .read(session_id, |shop| -> Result<_, AuthError> {
            Ok(shop.users.find_by_username(&request.username).cloned())
        })
        .await?;
    let user = state
        .auth_service
        .verify_credentials(stored, &request.password)
        .map_err(|e| {
            tracing::warn!("Failed login for '{}' in session {}", request.username, session_id);
            e
        })?;

    let response = state
        .sessions
        .write(session_id, |shop| {
            state.auth_service.login(shop, session_id, &user)
        })
        .await?;

    Ok(Json(response))
}

/// Log out of the current session
/// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn logout_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<StatusCode, AuthError> {
    state
        .sessions
        .write(user.session_id, |shop| -> Result<_, AuthError> {
            Ok(state.auth_service.logout(shop, &user.identity))
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get current user information (protected endpoint)
/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn me_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, AuthError> {
    let current = state
        .sessions
        .read(user.session_id, |shop| {
            state.auth_service.current_user(shop, &user.identity)
        })
        .await?;

    Ok(Json(current))
}
