use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::inventory::InventoryWarning;
use crate::promotions::PromotionNotice;

/// Order status enum representing the lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Preparing,
    Ready,
}

impl OrderStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cup size; recorded on the order but does not change price or stock usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Default for Size {
    fn default() -> Self {
        Size::Small
    }
}

/// Optional extras that consume additional ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum AddOn {
    #[serde(rename = "Extra Sugar")]
    ExtraSugar,
    Milk,
}

/// Eight-character order token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Fresh token taken from the head of a random UUID
    pub fn generate() -> Self {
        let token: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer's order
///
/// Fields other than `status` are fixed once the order is in the order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(value_type = String, example = "3f9a1c2e")]
    pub order_id: OrderId,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Latte")]
    pub coffee_type: String,
    pub size: Size,
    #[schema(value_type = Vec<AddOn>)]
    pub add_ons: BTreeSet<AddOn>,
    #[schema(example = 2, minimum = 1, maximum = 10)]
    pub quantity: u32,
    #[schema(value_type = String, example = "7.00")]
    pub price: Decimal,
    pub order_time: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }

    pub fn is_ready(&self) -> bool {
        self.status == OrderStatus::Ready
    }
}

/// Request DTO for placing an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    #[validate(length(min = 1, message = "Coffee type is required"))]
    #[schema(example = "Latte")]
    pub coffee_type: String,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    #[validate(range(min = 1, max = 10, message = "Quantity must be between 1 and 10"))]
    #[schema(example = 1, minimum = 1, maximum = 10)]
    pub quantity: u32,
    /// Optional promotion code; blank means none
    #[serde(default)]
    #[schema(example = "DISCOUNT10")]
    pub promo_code: Option<String>,
}

/// Response DTO for a placed order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderResponse {
    pub order: Order,
    /// Outcome of the promotion code, if one was supplied
    pub promotion: Option<PromotionNotice>,
    #[schema(example = 9)]
    pub estimated_prep_minutes: u32,
    /// Stock warnings raised by this order; only populated for admins
    pub inventory_warnings: Vec<InventoryWarning>,
}

/// Query parameters for order listings
#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    /// Optional status filter
    pub status: Option<OrderStatus>,
}
