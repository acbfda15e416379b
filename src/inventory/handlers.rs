// HTTP handlers for the admin inventory endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::middleware::AdminUser;
use crate::error::ApiError;
use crate::inventory::StockLevel;
use crate::state::AppState;

/// Current ledger levels
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryResponse {
    pub items: Vec<StockLevel>,
}

/// Request DTO for restock-all; the amount defaults to the configured one
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct RestockRequest {
    #[validate(range(min = 1, max = 100000, message = "Restock amount must be between 1 and 100000"))]
    #[schema(example = 100)]
    pub amount: Option<u32>,
}

/// Handler for GET /api/inventory
#[utoipa::path(
    get,
    path = "/api/inventory",
    responses(
        (status = 200, description = "Ingredient levels", body = InventoryResponse),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "inventory"
)]
pub async fn get_inventory_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<Json<InventoryResponse>, ApiError> {
    let items = state
        .sessions
        .read(admin.session_id, |shop| -> Result<_, ApiError> {
            Ok(shop.inventory.snapshot())
        })
        .await?;

    Ok(Json(InventoryResponse { items }))
}

/// Handler for POST /api/inventory/restock
/// Adds the same amount to every ingredient
#[utoipa::path(
    post,
    path = "/api/inventory/restock",
    request_body = RestockRequest,
    responses(
        (status = 200, description = "Levels after restocking", body = InventoryResponse),
        (status = 400, description = "Malformed body or amount out of range"),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "inventory"
)]
pub async fn restock_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    request: Result<Json<RestockRequest>, JsonRejection>,
) -> Result<Json<InventoryResponse>, ApiError> {
    // A bodiless POST restocks by the configured amount; a malformed body is a 400
    let request = match request {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => RestockRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    request.validate()?;
    let amount = request.amount.unwrap_or(state.config.restock_amount);

    let items = state
        .sessions
        .write_as(admin.session_id, &admin.identity, |shop| -> Result<_, ApiError> {
            shop.inventory.restock(amount);
            Ok(shop.inventory.snapshot())
        })
        .await?;

    tracing::info!("'{}' restocked all ingredients by {}", admin.username(), amount);
    Ok(Json(InventoryResponse { items }))
}
