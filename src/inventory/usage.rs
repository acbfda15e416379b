use std::collections::BTreeSet;

use crate::inventory::Ingredient;
use crate::orders::AddOn;

/// Grams of coffee beans per cup
pub const BEANS_PER_CUP: u32 = 10;
/// Millilitres of milk per cup with the Milk add-on
pub const MILK_PER_CUP: u32 = 200;
/// Grams of sugar per cup with the Extra Sugar add-on
pub const SUGAR_PER_CUP: u32 = 10;

/// Ingredients consumed by `quantity` cups with the given add-ons
///
/// Beans and cups always come first, followed by add-on ingredients.
pub fn ingredient_usage(quantity: u32, add_ons: &BTreeSet<AddOn>) -> Vec<(Ingredient, u32)> {
    let mut usage = vec![
        (Ingredient::CoffeeBeans, quantity * BEANS_PER_CUP),
        (Ingredient::Cups, quantity),
    ];
    if add_ons.contains(&AddOn::Milk) {
        usage.push((Ingredient::Milk, quantity * MILK_PER_CUP));
    }
    if add_ons.contains(&AddOn::ExtraSugar) {
        usage.push((Ingredient::Sugar, quantity * SUGAR_PER_CUP));
    }
    usage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryLedger;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_coffee_uses_beans_and_cups() {
        let usage = ingredient_usage(3, &BTreeSet::new());
        assert_eq!(usage, vec![(Ingredient::CoffeeBeans, 30), (Ingredient::Cups, 3)]);
    }

    #[test]
    fn test_scenario_two_cups_with_milk_and_sugar() {
        let mut ledger = InventoryLedger::standard(dec!(0.2));
        let add_ons = BTreeSet::from([AddOn::Milk, AddOn::ExtraSugar]);

        ledger.apply_usage(&ingredient_usage(2, &add_ons));

        assert_eq!(ledger.level(Ingredient::CoffeeBeans), Some(980));
        assert_eq!(ledger.level(Ingredient::Milk), Some(100));
        assert_eq!(ledger.level(Ingredient::Sugar), Some(180));
        assert_eq!(ledger.level(Ingredient::Cups), Some(98));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::inventory::InventoryLedger;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    /// Deduction is linear in quantity and sugar is untouched without Extra Sugar
    #[test]
    fn prop_milk_order_deducts_linearly() {
        proptest!(|(quantity in 1u32..=10)| {
            let mut ledger = InventoryLedger::new(
                [
                    (Ingredient::CoffeeBeans, 100_000),
                    (Ingredient::Milk, 100_000),
                    (Ingredient::Sugar, 100_000),
                    (Ingredient::Cups, 100_000),
                ],
                dec!(0.2),
            );

            ledger.apply_usage(&ingredient_usage(quantity, &BTreeSet::from([AddOn::Milk])));

            prop_assert_eq!(ledger.level(Ingredient::CoffeeBeans), Some(100_000 - 10 * quantity));
            prop_assert_eq!(ledger.level(Ingredient::Cups), Some(100_000 - quantity));
            prop_assert_eq!(ledger.level(Ingredient::Milk), Some(100_000 - 200 * quantity));
            prop_assert_eq!(ledger.level(Ingredient::Sugar), Some(100_000));
        });
    }
}
