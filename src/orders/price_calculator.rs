use rust_decimal::Decimal;

/// Service for calculating order prices and sales totals
pub struct PriceCalculator;

impl PriceCalculator {
    /// Price of an order line before any promotion
    ///
    /// # Arguments
    /// * `quantity` - Number of cups ordered
    /// * `unit_price` - Menu price per cup at time of order
    ///
    /// # Returns
    /// `quantity * unit_price`
    pub fn calculate_price(quantity: u32, unit_price: Decimal) -> Decimal {
        Decimal::from(quantity) * unit_price
    }

    /// Sum of a set of order prices
    pub fn calculate_total(prices: &[Decimal]) -> Decimal {
        prices.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculate_price_basic() {
        assert_eq!(PriceCalculator::calculate_price(2, dec!(3.50)), dec!(7.00));
    }

    #[test]
    fn test_calculate_price_single_cup() {
        assert_eq!(PriceCalculator::calculate_price(1, dec!(2.50)), dec!(2.50));
    }

    #[test]
    fn test_calculate_price_max_quantity() {
        assert_eq!(PriceCalculator::calculate_price(10, dec!(4.00)), dec!(40.00));
    }

    #[test]
    fn test_calculate_total_multiple_orders() {
        let prices = vec![dec!(7.00), dec!(2.70), dec!(3.25)];
        assert_eq!(PriceCalculator::calculate_total(&prices), dec!(12.95));
    }

    #[test]
    fn test_calculate_total_empty() {
        assert_eq!(PriceCalculator::calculate_total(&[]), dec!(0.00));
    }

    #[test]
    fn test_decimal_precision() {
        assert_eq!(PriceCalculator::calculate_price(3, dec!(4.33)), dec!(12.99));
    }
}
