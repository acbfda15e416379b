use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A coffee on the menu with its unit price in RM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    #[schema(example = "Latte")]
    pub name: String,
    #[schema(value_type = String, example = "3.50")]
    pub unit_price: Decimal,
}

/// Static price list keyed by coffee name
///
/// The catalog is read-only once built and keeps menu order for display.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from (name, price) pairs
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(name, unit_price)| MenuItem {
                    name: name.into(),
                    unit_price,
                })
                .collect(),
        }
    }

    /// The shop's fixed menu
    pub fn standard() -> Self {
        Self::new([
            ("Americano", Decimal::new(250, 2)),
            ("Cappuccino", Decimal::new(300, 2)),
            ("Latte", Decimal::new(350, 2)),
            ("Caramel Macchiato", Decimal::new(400, 2)),
        ])
    }

    /// Unit price of a coffee, if it is on the menu
    pub fn unit_price(&self, coffee_type: &str) -> Option<Decimal> {
        self.items
            .iter()
            .find(|item| item.name == coffee_type)
            .map(|item| item.unit_price)
    }

    pub fn contains(&self, coffee_type: &str) -> bool {
        self.unit_price(coffee_type).is_some()
    }

    /// All menu items in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
