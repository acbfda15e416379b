use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;

/// Ingredients tracked by the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    /// Grams
    CoffeeBeans,
    /// Millilitres
    Milk,
    /// Grams
    Sugar,
    /// Count
    Cups,
}

impl Ingredient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ingredient::CoffeeBeans => "coffee_beans",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Cups => "cups",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Ingredient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coffee_beans" => Ok(Ingredient::CoffeeBeans),
            "milk" => Ok(Ingredient::Milk),
            "sugar" => Ok(Ingredient::Sugar),
            "cups" => Ok(Ingredient::Cups),
            _ => Err(format!("Unknown ingredient: {}", s)),
        }
    }
}

/// Warning raised by a deduction
///
/// Warnings never block the deduction that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryWarning {
    /// Remaining level dropped below the low-stock threshold
    LowStock {
        item: Ingredient,
        remaining: u32,
        message: String,
    },
    /// The deduction asked for more than was on hand; the level stopped at zero
    Insufficient {
        item: Ingredient,
        shortfall: u32,
        message: String,
    },
}

/// Outcome of a single deduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    pub item: Ingredient,
    pub requested: u32,
    pub deducted: u32,
    pub remaining: u32,
    pub low_stock: bool,
}

impl Deduction {
    /// Amount requested but not available
    pub fn shortfall(&self) -> u32 {
        self.requested - self.deducted
    }

    /// Warnings this deduction produced, shortfall first
    pub fn warnings(&self) -> Vec<InventoryWarning> {
        let mut warnings = Vec::new();
        if self.shortfall() > 0 {
            warnings.push(InventoryWarning::Insufficient {
                item: self.item,
                shortfall: self.shortfall(),
                message: format!("Not enough {} in stock!", self.item),
            });
        }
        if self.low_stock {
            warnings.push(InventoryWarning::LowStock {
                item: self.item,
                remaining: self.remaining,
                message: format!("Low stock alert: Please restock {}!", self.item),
            });
        }
        warnings
    }
}

/// Point-in-time view of one ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockLevel {
    pub item: Ingredient,
    pub level: u32,
    pub baseline: u32,
    pub low_stock: bool,
}

#[derive(Debug, Clone, Copy)]
struct StockEntry {
    level: u32,
    baseline: u32,
}

/// Mutable ingredient-quantity store
///
/// Levels never go below zero: a deduction larger than the level empties it
/// and reports the remainder as a shortfall. Baselines are fixed at
/// construction and are what the low-stock threshold is measured against.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    entries: BTreeMap<Ingredient, StockEntry>,
    low_stock_ratio: Decimal,
}

impl InventoryLedger {
    /// Create a ledger whose starting levels double as baselines
    pub fn new<I>(baseline: I, low_stock_ratio: Decimal) -> Self
    where
        I: IntoIterator<Item = (Ingredient, u32)>,
    {
        Self {
            entries: baseline
                .into_iter()
                .map(|(item, level)| (item, StockEntry { level, baseline: level }))
                .collect(),
            low_stock_ratio,
        }
    }

    /// The shop's opening stock: 1000g beans, 500ml milk, 200g sugar, 100 cups
    pub fn standard(low_stock_ratio: Decimal) -> Self {
        Self::new(
            [
                (Ingredient::CoffeeBeans, 1000),
                (Ingredient::Milk, 500),
                (Ingredient::Sugar, 200),
                (Ingredient::Cups, 100),
            ],
            low_stock_ratio,
        )
    }

    /// Current level, or `None` if the ingredient is not tracked
    pub fn level(&self, item: Ingredient) -> Option<u32> {
        self.entries.get(&item).map(|entry| entry.level)
    }

    pub fn baseline(&self, item: Ingredient) -> Option<u32> {
        self.entries.get(&item).map(|entry| entry.baseline)
    }

    /// Subtract `amount` from an ingredient
    ///
    /// Returns `None` for an untracked ingredient, leaving the ledger untouched.
    pub fn deduct(&mut self, item: Ingredient, amount: u32) -> Option<Deduction> {
        let ratio = self.low_stock_ratio;
        let entry = self.entries.get_mut(&item)?;

        let deducted = amount.min(entry.level);
        entry.level -= deducted;

        let low_stock = below_threshold(entry.level, entry.baseline, ratio);
        if low_stock {
            tracing::warn!("Low stock: {} at {} (baseline {})", item, entry.level, entry.baseline);
        }
        if deducted < amount {
            tracing::warn!(
                "Insufficient {}: requested {}, only {} available",
                item,
                amount,
                deducted
            );
        }

        Some(Deduction {
            item,
            requested: amount,
            deducted,
            remaining: entry.level,
            low_stock,
        })
    }

    /// Deduct every (ingredient, amount) pair in order
    pub fn apply_usage(&mut self, usage: &[(Ingredient, u32)]) -> Vec<Deduction> {
        usage
            .iter()
            .filter_map(|&(item, amount)| self.deduct(item, amount))
            .collect()
    }

    /// Add the same amount to every tracked ingredient
    pub fn restock(&mut self, amount_per_item: u32) {
        for entry in self.entries.values_mut() {
            entry.level = entry.level.saturating_add(amount_per_item);
        }
        tracing::info!("Restocked {} ingredients by {}", self.entries.len(), amount_per_item);
    }

    pub fn is_low(&self, item: Ingredient) -> bool {
        self.entries
            .get(&item)
            .map(|entry| below_threshold(entry.level, entry.baseline, self.low_stock_ratio))
            .unwrap_or(false)
    }

    /// Levels of every tracked ingredient in a stable order
    pub fn snapshot(&self) -> Vec<StockLevel> {
        self.entries
            .iter()
            .map(|(&item, entry)| StockLevel {
                item,
                level: entry.level,
                baseline: entry.baseline,
                low_stock: below_threshold(entry.level, entry.baseline, self.low_stock_ratio),
            })
            .collect()
    }
}

fn below_threshold(level: u32, baseline: u32, ratio: Decimal) -> bool {
    Decimal::from(level) < ratio * Decimal::from(baseline)
}
