// HTTP handlers for sales and profit reports

use axum::{extract::State, Json};

use crate::auth::middleware::{AdminUser, AuthenticatedUser};
use crate::error::ApiError;
use crate::reports::{CostModel, ProfitReport, SalesReport};
use crate::state::AppState;

/// Handler for GET /api/reports/sales
/// Admins get a report over every order, customers over their own history
#[utoipa::path(
    get,
    path = "/api/reports/sales",
    responses(
        (status = 200, description = "Sales summary", body = SalesReport),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn sales_report_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<SalesReport>, ApiError> {
    let report = state
        .sessions
        .read(user.session_id, |shop| -> Result<_, ApiError> {
            let orders = state.order_service.list_orders(shop, &user.identity, None);
            Ok(SalesReport::from_orders(&orders))
        })
        .await?;

    tracing::debug!(
        "Sales report for '{}': {} orders, RM {}",
        user.username(),
        report.order_count,
        report.total_sales
    );
    Ok(Json(report))
}

/// Handler for GET /api/reports/profit
#[utoipa::path(
    get,
    path = "/api/reports/profit",
    responses(
        (status = 200, description = "Revenue, ingredient cost and profit", body = ProfitReport),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn profit_report_handler(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<Json<ProfitReport>, ApiError> {
    let costs = CostModel::standard();
    let report = state
        .sessions
        .read(admin.session_id, |shop| -> Result<_, ApiError> {
            Ok(ProfitReport::from_orders(shop.orders.find_all(None), &costs))
        })
        .await?;

    Ok(Json(report))
}
