use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::orders::{Order, PriceCalculator};

/// Orders and revenue for one coffee type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoffeeSales {
    #[schema(example = "Latte")]
    pub coffee_type: String,
    #[schema(example = 3)]
    pub order_count: usize,
    #[schema(value_type = String, example = "10.50")]
    pub revenue: Decimal,
}

/// Summary of a set of orders
///
/// With no orders the report is empty rather than an error: zero totals, no
/// best or worst seller, and `has_sales_data == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalesReport {
    #[schema(value_type = String, example = "24.30")]
    pub total_sales: Decimal,
    pub order_count: usize,
    /// Most-ordered coffee by order count; ties go to the alphabetically first name
    pub best_seller: Option<String>,
    /// Least-ordered coffee by order count; ties go to the alphabetically first name
    pub worst_seller: Option<String>,
    /// Per-coffee breakdown sorted by name
    pub breakdown: Vec<CoffeeSales>,
    pub has_sales_data: bool,
}

impl SalesReport {
    /// Build a report over any set of orders
    pub fn from_orders<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut by_coffee: BTreeMap<&str, (usize, Vec<Decimal>)> = BTreeMap::new();
        let mut prices = Vec::new();

        for order in orders {
            let entry = by_coffee.entry(order.coffee_type.as_str()).or_default();
            entry.0 += 1;
            entry.1.push(order.price);
            prices.push(order.price);
        }

        let breakdown: Vec<CoffeeSales> = by_coffee
            .into_iter()
            .map(|(coffee_type, (order_count, coffee_prices))| CoffeeSales {
                coffee_type: coffee_type.to_string(),
                order_count,
                revenue: PriceCalculator::calculate_total(&coffee_prices),
            })
            .collect();

        // `breakdown` is name-ordered, so keeping the first of equal counts
        // resolves ties to the alphabetically smallest name.
        let best_seller = breakdown
            .iter()
            .fold(None::<&CoffeeSales>, |best, sales| match best {
                Some(current) if current.order_count >= sales.order_count => Some(current),
                _ => Some(sales),
            })
            .map(|sales| sales.coffee_type.clone());
        let worst_seller = breakdown
            .iter()
            .fold(None::<&CoffeeSales>, |worst, sales| match worst {
                Some(current) if current.order_count <= sales.order_count => Some(current),
                _ => Some(sales),
            })
            .map(|sales| sales.coffee_type.clone());

        Self {
            total_sales: PriceCalculator::calculate_total(&prices),
            order_count: prices.len(),
            best_seller,
            worst_seller,
            has_sales_data: !breakdown.is_empty(),
            breakdown,
        }
    }
}
