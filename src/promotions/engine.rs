use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::orders::Order;
use crate::promotions::PromotionError;

/// A discount that was applied to an order
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPromotion {
    pub code: String,
    /// Fraction taken off the price, e.g. 0.10
    pub discount: Decimal,
    pub price_before: Decimal,
    pub price_after: Decimal,
}

impl AppliedPromotion {
    /// Whole-number percentage for display, truncated
    pub fn percent_off(&self) -> u32 {
        (self.discount * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u32()
            .unwrap_or(0)
    }
}

/// Customer-facing outcome of a promotion code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PromotionNotice {
    #[schema(example = "DISCOUNT10")]
    pub code: String,
    pub applied: bool,
    #[schema(example = 10)]
    pub percent_off: Option<u32>,
    #[schema(example = "Promo applied! 10% off!")]
    pub message: String,
}

impl PromotionNotice {
    pub fn applied(promotion: &AppliedPromotion) -> Self {
        let percent_off = promotion.percent_off();
        Self {
            code: promotion.code.clone(),
            applied: true,
            percent_off: Some(percent_off),
            message: format!("Promo applied! {}% off!", percent_off),
        }
    }

    pub fn rejected(code: &str, error: &PromotionError) -> Self {
        Self {
            code: code.to_string(),
            applied: false,
            percent_off: None,
            message: error.to_string(),
        }
    }
}

/// Discount-code lookup and application
///
/// Applying a code is not idempotent: a second application compounds the
/// discount. Callers apply at most once, before the order is booked.
#[derive(Debug, Clone)]
pub struct PromotionEngine {
    codes: HashMap<String, Decimal>,
}

impl PromotionEngine {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|(code, discount)| (code.into(), discount))
                .collect(),
        }
    }

    /// The shop's standing codes
    pub fn standard() -> Self {
        Self::new([("DISCOUNT10", Decimal::new(10, 2))])
    }

    /// Discount fraction for a code; codes match exactly
    pub fn discount_for(&self, code: &str) -> Option<Decimal> {
        self.codes.get(code).copied()
    }

    /// Multiply the order's price by `1 - discount`
    ///
    /// An unknown code leaves the price untouched.
    pub fn apply_to_order(
        &self,
        order: &mut Order,
        code: &str,
    ) -> Result<AppliedPromotion, PromotionError> {
        let discount = self.discount_for(code).ok_or_else(|| {
            tracing::debug!("Rejected promotion code '{}' for order {}", code, order.order_id);
            PromotionError::InvalidCode(code.to_string())
        })?;

        let price_before = order.price;
        order.price = price_before * (Decimal::ONE - discount);

        tracing::debug!(
            "Applied promotion '{}' to order {}: {} -> {}",
            code,
            order.order_id,
            price_before,
            order.price
        );

        Ok(AppliedPromotion {
            code: code.to_string(),
            discount,
            price_before,
            price_after: order.price,
        })
    }
}

impl Default for PromotionEngine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{OrderId, OrderStatus, Size};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::collections::BTreeSet;

    fn order_with_price(price: Decimal) -> Order {
        Order {
            order_id: OrderId::from("abcd1234"),
            username: "customer".to_string(),
            coffee_type: "Latte".to_string(),
            size: Size::Medium,
            add_ons: BTreeSet::new(),
            quantity: 2,
            price,
            order_time: Utc::now(),
            status: OrderStatus::Preparing,
        }
    }

    #[test]
    fn test_valid_code_discounts_price() {
        let engine = PromotionEngine::standard();
        let mut order = order_with_price(dec!(7.00));

        let applied = engine.apply_to_order(&mut order, "DISCOUNT10").unwrap();

        assert_eq!(order.price, dec!(6.30));
        assert_eq!(applied.price_before, dec!(7.00));
        assert_eq!(applied.price_after, dec!(6.30));
        assert_eq!(applied.percent_off(), 10);
    }

    #[test]
    fn test_invalid_code_leaves_price_unchanged() {
        let engine = PromotionEngine::standard();
        let mut order = order_with_price(dec!(7.00));

        let result = engine.apply_to_order(&mut order, "FREECOFFEE");

        assert!(matches!(result, Err(PromotionError::InvalidCode(ref code)) if code == "FREECOFFEE"));
        assert_eq!(order.price, dec!(7.00));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let engine = PromotionEngine::standard();
        assert_eq!(engine.discount_for("discount10"), None);
        assert_eq!(engine.discount_for("DISCOUNT10"), Some(dec!(0.10)));
    }

    #[test]
    fn test_second_application_compounds() {
        let engine = PromotionEngine::standard();
        let mut order = order_with_price(dec!(10.00));

        engine.apply_to_order(&mut order, "DISCOUNT10").unwrap();
        engine.apply_to_order(&mut order, "DISCOUNT10").unwrap();

        assert_eq!(order.price, dec!(8.10));
    }

    #[test]
    fn test_notices() {
        let applied = AppliedPromotion {
            code: "DISCOUNT10".to_string(),
            discount: dec!(0.10),
            price_before: dec!(3.00),
            price_after: dec!(2.70),
        };
        let notice = PromotionNotice::applied(&applied);
        assert!(notice.applied);
        assert_eq!(notice.percent_off, Some(10));
        assert_eq!(notice.message, "Promo applied! 10% off!");

        let notice =
            PromotionNotice::rejected("NOPE", &PromotionError::InvalidCode("NOPE".to_string()));
        assert!(!notice.applied);
        assert_eq!(notice.percent_off, None);
        assert_eq!(notice.message, "Invalid promo code.");
    }
}
