// Prep Time
//
// Estimates how long an order takes to prepare from its cup count.

/// Fixed setup time for any order, in minutes
pub const BASE_PREP_MINUTES: u32 = 5;
/// Additional minutes per cup
pub const MINUTES_PER_CUP: u32 = 2;

/// Estimated preparation time in minutes for `quantity` cups
pub fn estimate_prep_minutes(quantity: u32) -> u32 {
    BASE_PREP_MINUTES + MINUTES_PER_CUP * quantity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimates() {
        assert_eq!(estimate_prep_minutes(1), 7);
        assert_eq!(estimate_prep_minutes(2), 9);
        assert_eq!(estimate_prep_minutes(10), 25);
    }
}
