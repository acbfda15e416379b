use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inventory::{ingredient_usage, Ingredient};
use crate::orders::{Order, PriceCalculator};

/// Fixed per-unit ingredient costs in RM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    pub beans_per_gram: Decimal,
    pub milk_per_ml: Decimal,
    pub sugar_per_gram: Decimal,
    pub per_cup: Decimal,
}

impl CostModel {
    pub fn standard() -> Self {
        Self {
            beans_per_gram: Decimal::new(5, 2),
            milk_per_ml: Decimal::new(2, 2),
            sugar_per_gram: Decimal::new(1, 2),
            per_cup: Decimal::new(10, 2),
        }
    }

    pub fn unit_cost(&self, item: Ingredient) -> Decimal {
        match item {
            Ingredient::CoffeeBeans => self.beans_per_gram,
            Ingredient::Milk => self.milk_per_ml,
            Ingredient::Sugar => self.sugar_per_gram,
            Ingredient::Cups => self.per_cup,
        }
    }

    /// Ingredient cost of one order
    pub fn order_cost(&self, order: &Order) -> Decimal {
        ingredient_usage(order.quantity, &order.add_ons)
            .into_iter()
            .map(|(item, amount)| self.unit_cost(item) * Decimal::from(amount))
            .sum()
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Revenue, ingredient cost and profit over a set of orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfitReport {
    #[schema(value_type = String, example = "3.00")]
    pub revenue: Decimal,
    #[schema(value_type = String, example = "0.60")]
    pub cost: Decimal,
    #[schema(value_type = String, example = "2.40")]
    pub profit: Decimal,
    pub order_count: usize,
}

impl ProfitReport {
    pub fn from_orders<'a, I>(orders: I, costs: &CostModel) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let (prices, order_costs): (Vec<Decimal>, Vec<Decimal>) = orders
            .into_iter()
            .map(|order| (order.price, costs.order_cost(order)))
            .unzip();

        let revenue = PriceCalculator::calculate_total(&prices);
        let cost = PriceCalculator::calculate_total(&order_costs);

        Self {
            revenue,
            cost,
            profit: revenue - cost,
            order_count: prices.len(),
        }
    }
}
