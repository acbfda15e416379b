// HTTP handlers for order feedback

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::feedback::{Feedback, SubmitFeedbackRequest};
use crate::orders::{OrderError, OrderId};
use crate::state::AppState;

/// Handler for POST /api/orders/{order_id}/feedback
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/feedback",
    params(("order_id" = String, Path, description = "Eight-character order id")),
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, description = "Feedback recorded", body = Feedback),
        (status = 400, description = "Rating outside 1-5"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "No such order")
    ),
    security(("bearer_auth" = [])),
    tag = "feedback"
)]
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(order_id): Path<String>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<Feedback>), OrderError> {
    request
        .validate()
        .map_err(|e| OrderError::ValidationError(e.to_string()))?;

    let order_id = OrderId::from(order_id);
    let feedback = state
        .sessions
        .write_as(user.session_id, &user.identity, |shop| {
            state
                .order_service
                .submit_feedback(shop, &user.identity, &order_id, request)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Handler for GET /api/orders/{order_id}/feedback
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/feedback",
    params(("order_id" = String, Path, description = "Eight-character order id")),
    responses(
        (status = 200, description = "Feedback, oldest first", body = [Feedback]),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "No such order")
    ),
    security(("bearer_auth" = [])),
    tag = "feedback"
)]
pub async fn list_feedback_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<Feedback>>, OrderError> {
    let order_id = OrderId::from(order_id);
    let feedback = state
        .sessions
        .read(user.session_id, |shop| {
            state
                .order_service
                .list_feedback(shop, &user.identity, &order_id)
        })
        .await?;

    Ok(Json(feedback))
}
