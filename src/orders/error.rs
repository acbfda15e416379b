use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::orders::OrderId;
use crate::session::SessionError;

/// Error types for order operations
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Unknown coffee type: {0}")]
    UnknownCoffee(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Order id already booked: {0}")]
    DuplicateOrderId(OrderId),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Cannot update order status: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            OrderError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Order {} not found", id))
            }
            OrderError::UnknownCoffee(name) => (
                StatusCode::BAD_REQUEST,
                format!("Coffee type '{}' is not on the menu", name),
            ),
            OrderError::InvalidQuantity(msg) => (StatusCode::BAD_REQUEST, msg),
            OrderError::DuplicateOrderId(id) => {
                tracing::error!("Order id collision on {}", id);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not allocate an order id".to_string(),
                )
            }
            OrderError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            OrderError::InvalidTransition(msg) => (StatusCode::CONFLICT, msg),
            OrderError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            OrderError::Session(err @ SessionError::LoggedOut(_)) => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            OrderError::Session(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_session_errors_map_to_distinct_statuses() {
        let missing = OrderError::from(SessionError::NotFound(Uuid::nil())).into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let logged_out = OrderError::from(SessionError::LoggedOut(Uuid::nil())).into_response();
        assert_eq!(logged_out.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_transition_is_conflict() {
        let response = OrderError::InvalidTransition("Ready to Preparing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
