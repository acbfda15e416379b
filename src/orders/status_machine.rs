use crate::orders::OrderStatus;

/// Order status rules: an order is brewed, then waits for pickup
pub struct StatusMachine;

impl StatusMachine {
    /// `Preparing -> Ready` is the only move; staying put is always allowed and Ready is terminal
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        from == to || (from, to) == (OrderStatus::Preparing, OrderStatus::Ready)
    }

    /// Status after the move, or a message naming the rejected move
    pub fn transition(from: OrderStatus, to: OrderStatus) -> Result<OrderStatus, String> {
        if !Self::is_valid_transition(from, to) {
            return Err(format!("Order cannot go from {} back to {}", from, to));
        }
        Ok(to)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_status() -> impl Strategy<Value = OrderStatus> {
        prop_oneof![Just(OrderStatus::Preparing), Just(OrderStatus::Ready)]
    }

    #[test]
    fn prop_staying_put_is_allowed() {
        proptest!(|(status in any_status())| {
            prop_assert!(StatusMachine::is_valid_transition(status, status));
        });
    }

    #[test]
    fn prop_ready_is_terminal() {
        proptest!(|(next in any_status())| {
            let result = StatusMachine::transition(OrderStatus::Ready, next);
            if next == OrderStatus::Ready {
                prop_assert_eq!(result, Ok(OrderStatus::Ready));
            } else {
                prop_assert!(result.is_err());
            }
        });
    }

    #[test]
    fn prop_transition_matches_validity_check() {
        proptest!(|(
            from in any_status(),
            to in any_status()
        )| {
            prop_assert_eq!(
                StatusMachine::transition(from, to).is_ok(),
                StatusMachine::is_valid_transition(from, to)
            );
        });
    }
}
