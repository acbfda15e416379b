// HTTP handlers for order endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::{AdminUser, AuthenticatedUser};
use crate::orders::{
    Order, OrderError, OrderId, OrderListQuery, PlaceOrderRequest, PlaceOrderResponse,
};
use crate::state::AppState;

/// Handler for POST /api/orders
/// Places an order for the authenticated user
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Unknown coffee or invalid quantity"),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer_auth" = [])),
    tag = "orders"
)]
pub async fn place_order_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>), OrderError> {
    request
        .validate()
        .map_err(|e| OrderError::ValidationError(e.to_string()))?;

    let response = state
        .sessions
        .write_as(user.session_id, &user.identity, |shop| {
            state
                .order_service
                .place_order(shop, &user.identity, request)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /api/orders
/// Admins see the whole order book, customers their own history
#[utoipa::path(
    get,
    path = "/api/orders",
    params(("status" = Option<String>, Query, description = "Preparing or Ready")),
    responses(
        (status = 200, description = "Orders in placement order", body = [Order]),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer_auth" = [])),
    tag = "orders"
)]
pub async fn list_orders_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<Order>>, OrderError> {
    let orders = state
        .sessions
        .read(user.session_id, |shop| -> Result<_, OrderError> {
            Ok(state
                .order_service
                .list_orders(shop, &user.identity, query.status))
        })
        .await?;

    Ok(Json(orders))
}

/// Handler for GET /api/orders/pickup
/// The caller's orders that are ready to collect
#[utoipa::path(
    get,
    path = "/api/orders/pickup",
    responses(
        (status = 200, description = "Ready orders", body = [Order]),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer_auth" = [])),
    tag = "orders"
)]
pub async fn pickup_notifications_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Order>>, OrderError> {
    let orders = state
        .sessions
        .read(user.session_id, |shop| -> Result<_, OrderError> {
            Ok(state.order_service.pickup_notifications(shop, &user.identity))
        })
        .await?;

    Ok(Json(orders))
}

/// Handler for GET /api/orders/{order_id}
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    params(("order_id" = String, Path, description = "Eight-character order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "No such order")
    ),
    security(("bearer_auth" = [])),
    tag = "orders"
)]
pub async fn get_order_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    let order_id = OrderId::from(order_id);
    let order = state
        .sessions
        .read(user.session_id, |shop| {
            state.order_service.get_order(shop, &user.identity, &order_id)
        })
        .await?;

    Ok(Json(order))
}

/// Handler for POST /api/orders/{order_id}/ready
/// Marks an order ready for pickup (admin only)
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/ready",
    params(("order_id" = String, Path, description = "Eight-character order id")),
    responses(
        (status = 200, description = "Order is ready", body = Order),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "No such order")
    ),
    security(("bearer_auth" = [])),
    tag = "orders"
)]
pub async fn mark_ready_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    let order_id = OrderId::from(order_id);
    let order = state
        .sessions
        .write_as(admin.session_id, &admin.identity, |shop| {
            state.order_service.mark_ready(shop, &order_id)
        })
        .await?;

    Ok(Json(order))
}
