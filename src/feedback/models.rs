use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::orders::OrderId;

/// A customer's comment and rating on one of their orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    #[schema(value_type = String, example = "3f9a1c2e")]
    pub order_id: OrderId,
    pub username: String,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: u8,
    #[schema(example = "Great latte")]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for submitting feedback
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SubmitFeedbackRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(max = 1000, message = "Comment must not exceed 1000 characters"))]
    #[serde(default)]
    pub comment: String,
}

/// Feedback entries grouped by order
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    entries: HashMap<OrderId, Vec<Feedback>>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, feedback: Feedback) -> &Feedback {
        let entries = self.entries.entry(feedback.order_id.clone()).or_default();
        entries.push(feedback);
        &entries[entries.len() - 1]
    }

    /// Feedback for an order, oldest first
    pub fn for_order(&self, order_id: &OrderId) -> &[Feedback] {
        self.entries
            .get(order_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
