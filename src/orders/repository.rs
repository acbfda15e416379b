use std::collections::HashMap;

use crate::orders::error::OrderError;
use crate::orders::{Order, OrderId, OrderStatus};

/// In-memory order book for one shop session
///
/// Orders are kept in placement order. The per-user index holds positions
/// into the same vector, so a status change is visible from every view.
/// Only `status` can change after an order is booked.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    by_id: HashMap<OrderId, usize>,
    by_user: HashMap<String, Vec<usize>>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh order id not yet present in the book
    pub fn next_order_id(&self) -> OrderId {
        loop {
            let id = OrderId::generate();
            if !self.by_id.contains_key(&id) {
                return id;
            }
            tracing::debug!("Order id {} collided, regenerating", id);
        }
    }

    /// Append an order to the book and its owner's history
    pub fn create(&mut self, order: Order) -> Result<&Order, OrderError> {
        if self.by_id.contains_key(&order.order_id) {
            return Err(OrderError::DuplicateOrderId(order.order_id));
        }

        let position = self.orders.len();
        self.by_id.insert(order.order_id.clone(), position);
        self.by_user
            .entry(order.username.clone())
            .or_default()
            .push(position);
        self.orders.push(order);

        Ok(&self.orders[position])
    }

    /// Find an order by its id
    pub fn find_by_id(&self, order_id: &OrderId) -> Option<&Order> {
        self.by_id.get(order_id).map(|&position| &self.orders[position])
    }

    /// A user's orders in placement order, optionally filtered by status
    pub fn find_by_user(&self, username: &str, status: Option<OrderStatus>) -> Vec<&Order> {
        self.by_user
            .get(username)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &self.orders[position])
                    .filter(|order| status.map_or(true, |s| order.status == s))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every order in placement order, optionally filtered by status
    pub fn find_all(&self, status: Option<OrderStatus>) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| status.map_or(true, |s| order.status == s))
            .collect()
    }

    /// Set an order's status; no other field is ever written
    pub fn update_status(
        &mut self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<&Order, OrderError> {
        let position = *self
            .by_id
            .get(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        let order = &mut self.orders[position];
        order.status = status;
        Ok(order)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
