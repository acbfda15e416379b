use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::auth::models::Identity;
use crate::catalog::Catalog;
use crate::feedback::{Feedback, SubmitFeedbackRequest};
use crate::inventory::{ingredient_usage, InventoryWarning};
use crate::orders::{
    estimate_prep_minutes, Order, OrderError, OrderId, OrderStatus, PlaceOrderRequest,
    PlaceOrderResponse, PriceCalculator, StatusMachine,
};
use crate::promotions::{PromotionEngine, PromotionNotice};
use crate::session::ShopState;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// Service for order business logic
///
/// Stateless apart from the shared menu and promotion codes; every call works
/// against the `ShopState` of the caller's session.
#[derive(Clone)]
pub struct OrderService {
    catalog: Arc<Catalog>,
    promotions: Arc<PromotionEngine>,
}

impl OrderService {
    pub fn new(catalog: Arc<Catalog>, promotions: Arc<PromotionEngine>) -> Self {
        Self {
            catalog,
            promotions,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Place an order for the acting user
    ///
    /// # Steps
    /// - Price is `unit_price * quantity`, then the promotion code (if any)
    ///   is applied once to the draft
    /// - The order is booked as `Preparing`
    /// - Ingredients are deducted; shortages never block the order
    /// - Stock warnings are returned only to admins
    pub fn place_order(
        &self,
        shop: &mut ShopState,
        user: &Identity,
        request: PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, OrderError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&request.quantity) {
            return Err(OrderError::InvalidQuantity(format!(
                "Quantity must be between {} and {}, got {}",
                MIN_QUANTITY, MAX_QUANTITY, request.quantity
            )));
        }

        let unit_price = self
            .catalog
            .unit_price(&request.coffee_type)
            .ok_or_else(|| OrderError::UnknownCoffee(request.coffee_type.clone()))?;

        let mut order = Order {
            order_id: shop.orders.next_order_id(),
            username: user.username.clone(),
            coffee_type: request.coffee_type,
            size: request.size,
            add_ons: request.add_ons.into_iter().collect::<BTreeSet<_>>(),
            quantity: request.quantity,
            price: PriceCalculator::calculate_price(request.quantity, unit_price),
            order_time: Utc::now(),
            status: OrderStatus::Preparing,
        };

        let promotion = request
            .promo_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(|code| match self.promotions.apply_to_order(&mut order, code) {
                Ok(applied) => PromotionNotice::applied(&applied),
                Err(err) => PromotionNotice::rejected(code, &err),
            });

        let order = shop.orders.create(order)?.clone();

        let deductions = shop
            .inventory
            .apply_usage(&ingredient_usage(order.quantity, &order.add_ons));
        let inventory_warnings: Vec<InventoryWarning> = if user.is_admin() {
            deductions.iter().flat_map(|d| d.warnings()).collect()
        } else {
            Vec::new()
        };

        tracing::info!(
            "Order {} placed by '{}': {} x {} for RM {}",
            order.order_id,
            order.username,
            order.quantity,
            order.coffee_type,
            order.price
        );

        Ok(PlaceOrderResponse {
            estimated_prep_minutes: estimate_prep_minutes(order.quantity),
            order,
            promotion,
            inventory_warnings,
        })
    }

    /// Orders visible to the user: everything for admins, own history otherwise
    pub fn list_orders(
        &self,
        shop: &ShopState,
        user: &Identity,
        status: Option<OrderStatus>,
    ) -> Vec<Order> {
        let orders = if user.is_admin() {
            shop.orders.find_all(status)
        } else {
            shop.orders.find_by_user(&user.username, status)
        };
        orders.into_iter().cloned().collect()
    }

    /// The user's own orders that are ready for pickup
    pub fn pickup_notifications(&self, shop: &ShopState, user: &Identity) -> Vec<Order> {
        shop.orders
            .find_by_user(&user.username, Some(OrderStatus::Ready))
            .into_iter()
            .cloned()
            .collect()
    }

    /// One order, visible to its owner and to admins
    pub fn get_order(
        &self,
        shop: &ShopState,
        user: &Identity,
        order_id: &OrderId,
    ) -> Result<Order, OrderError> {
        let order = shop
            .orders
            .find_by_id(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        if order.username != user.username && !user.is_admin() {
            return Err(OrderError::Forbidden(
                "You do not have permission to access this order".to_string(),
            ));
        }

        Ok(order.clone())
    }

    /// Move an order to `Ready`; repeating it is a no-op
    ///
    /// Callers restrict this to admins.
    pub fn mark_ready(&self, shop: &mut ShopState, order_id: &OrderId) -> Result<Order, OrderError> {
        let current = shop
            .orders
            .find_by_id(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?
            .status;

        let next = StatusMachine::transition(current, OrderStatus::Ready)
            .map_err(OrderError::InvalidTransition)?;

        let order = shop.orders.update_status(order_id, next)?.clone();
        if current != next {
            tracing::info!("Order {} is ready for pickup", order_id);
        }
        Ok(order)
    }

    /// Record feedback on one of the user's own orders
    pub fn submit_feedback(
        &self,
        shop: &mut ShopState,
        user: &Identity,
        order_id: &OrderId,
        request: SubmitFeedbackRequest,
    ) -> Result<Feedback, OrderError> {
        let order = shop
            .orders
            .find_by_id(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        if order.username != user.username {
            return Err(OrderError::Forbidden(
                "Only the customer who placed the order can leave feedback".to_string(),
            ));
        }

        let feedback = shop
            .feedback
            .add(Feedback {
                order_id: order_id.clone(),
                username: user.username.clone(),
                rating: request.rating,
                comment: request.comment.trim().to_string(),
                created_at: Utc::now(),
            })
            .clone();

        tracing::info!(
            "Feedback for order {} from '{}': {}/5",
            order_id,
            user.username,
            feedback.rating
        );
        Ok(feedback)
    }

    /// Feedback on an order, visible to its owner and to admins
    pub fn list_feedback(
        &self,
        shop: &ShopState,
        user: &Identity,
        order_id: &OrderId,
    ) -> Result<Vec<Feedback>, OrderError> {
        self.get_order(shop, user, order_id)?;
        Ok(shop.feedback.for_order(order_id).to_vec())
    }
}
