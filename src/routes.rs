// Router, OpenAPI document and the small public endpoints

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi, ToSchema,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{
    self,
    models::{AuthResponse, Identity, LoginRequest, RegisterRequest, Role, UserResponse},
};
use crate::catalog::MenuItem;
use crate::error::ErrorResponse;
use crate::feedback::{self, Feedback, SubmitFeedbackRequest};
use crate::inventory::{
    self, Ingredient, InventoryResponse, InventoryWarning, RestockRequest, StockLevel,
};
use crate::orders::{
    self, AddOn, Order, OrderStatus, PlaceOrderRequest, PlaceOrderResponse, Size,
};
use crate::promotions::PromotionNotice;
use crate::reports::{self, CoffeeSales, ProfitReport, SalesReport};
use crate::session::{self, SessionResponse};
use crate::state::AppState;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        get_menu,
        session::handlers::create_session_handler,
        session::handlers::end_session_handler,
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        auth::handlers::logout_handler,
        auth::handlers::me_handler,
        orders::handlers::place_order_handler,
        orders::handlers::list_orders_handler,
        orders::handlers::pickup_notifications_handler,
        orders::handlers::get_order_handler,
        orders::handlers::mark_ready_handler,
        feedback::handlers::submit_feedback_handler,
        feedback::handlers::list_feedback_handler,
        inventory::handlers::get_inventory_handler,
        inventory::handlers::restock_handler,
        reports::handlers::sales_report_handler,
        reports::handlers::profit_report_handler,
    ),
    components(
        schemas(
            HealthResponse, MenuResponse, MenuItem, ErrorResponse, SessionResponse,
            Role, Identity, RegisterRequest, LoginRequest, AuthResponse, UserResponse,
            OrderStatus, Size, AddOn, Order, PlaceOrderRequest, PlaceOrderResponse,
            PromotionNotice, Feedback, SubmitFeedbackRequest,
            Ingredient, InventoryWarning, StockLevel, InventoryResponse, RestockRequest,
            SalesReport, CoffeeSales, ProfitReport
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "shop", description = "Health and menu"),
        (name = "sessions", description = "Shop session lifecycle"),
        (name = "auth", description = "Registration, login and logout"),
        (name = "orders", description = "Placing and tracking orders"),
        (name = "feedback", description = "Order feedback"),
        (name = "inventory", description = "Ingredient stock (admin)"),
        (name = "reports", description = "Sales and profit reports")
    ),
    info(
        title = "Coffee Shop API",
        version = "1.0.0",
        description = "Ordering, inventory, promotions and sales reporting for a coffee shop"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "shop"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handler for GET /api/menu
#[utoipa::path(
    get,
    path = "/api/menu",
    responses((status = 200, description = "Coffees and unit prices", body = MenuResponse)),
    tag = "shop"
)]
pub async fn get_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    Json(MenuResponse {
        items: state.catalog().items().to_vec(),
    })
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(state: AppState) -> Router {
    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .route("/api/menu", get(get_menu))
        // Sessions and auth
        .route("/api/sessions", post(session::create_session_handler))
        .route(
            "/api/sessions/:session_id",
            axum::routing::delete(session::end_session_handler),
        )
        .route("/api/sessions/:session_id/register", post(auth::register_handler))
        .route("/api/sessions/:session_id/login", post(auth::login_handler))
        .route("/api/auth/logout", post(auth::logout_handler))
        .route("/api/auth/me", get(auth::me_handler))
        // Orders
        .route(
            "/api/orders",
            post(orders::place_order_handler).get(orders::list_orders_handler),
        )
        .route("/api/orders/pickup", get(orders::pickup_notifications_handler))
        .route("/api/orders/:order_id", get(orders::get_order_handler))
        .route("/api/orders/:order_id/ready", post(orders::mark_ready_handler))
        .route(
            "/api/orders/:order_id/feedback",
            post(feedback::submit_feedback_handler).get(feedback::list_feedback_handler),
        )
        // Admin
        .route("/api/inventory", get(inventory::get_inventory_handler))
        .route("/api/inventory/restock", post(inventory::restock_handler))
        .route("/api/reports/sales", get(reports::sales_report_handler))
        .route("/api/reports/profit", get(reports::profit_report_handler))
        .layer(cors)
        .with_state(state)
}
