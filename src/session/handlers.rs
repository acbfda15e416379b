// HTTP handlers for shop session lifecycle

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response DTO for a newly opened session
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Handler for POST /api/sessions
/// Opens a session with the seeded accounts and opening stock
#[utoipa::path(
    post,
    path = "/api/sessions",
    responses(
        (status = 201, description = "Session opened", body = SessionResponse)
    ),
    tag = "sessions"
)]
pub async fn create_session_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let shop = state.new_shop();
    let created_at = shop.created_at;
    let session_id = state.sessions.create(shop).await;

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            created_at,
        }),
    )
}

/// Handler for DELETE /api/sessions/{session_id}
/// Drops the session and all state it owns
#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}",
    params(("session_id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "No such session")
    ),
    tag = "sessions"
)]
pub async fn end_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
