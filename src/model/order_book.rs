//! Append-only record of placed orders.

use crate::model::{Order, OrderError, OrderStatus, TrackingNumber};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderBookError {
    #[error("Tracking number already in use: {0}")]
    DuplicateTrackingNumber(TrackingNumber),

    #[error("Order not found: {0}")]
    NotFound(TrackingNumber),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Orders in the sequence they were placed.
///
/// Orders are never removed. Lookups by tracking number go through an index
/// so the display order stays untouched.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    index: HashMap<TrackingNumber, usize>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `order` and returns a reference to the stored copy.
    pub fn place(&mut self, order: Order) -> Result<&Order, OrderBookError> {
        let tracking_number = order.tracking_number().clone();
        if self.index.contains_key(&tracking_number) {
            return Err(OrderBookError::DuplicateTrackingNumber(tracking_number));
        }
        let position = self.orders.len();
        self.orders.push(order);
        self.index.insert(tracking_number, position);
        Ok(&self.orders[position])
    }

    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn find(&self, tracking_number: &TrackingNumber) -> Option<&Order> {
        self.index
            .get(tracking_number)
            .map(|&position| &self.orders[position])
    }

    pub fn update_status(
        &mut self,
        tracking_number: &TrackingNumber,
        status: OrderStatus,
    ) -> Result<&Order, OrderBookError> {
        let position = *self
            .index
            .get(tracking_number)
            .ok_or_else(|| OrderBookError::NotFound(tracking_number.clone()))?;
        self.orders[position].update_status(status)?;
        Ok(&self.orders[position])
    }

    /// Tracking entries for every order, oldest first.
    pub fn tracking_report(&self) -> String {
        self.orders.iter().map(Order::tracking_entry).collect()
    }
}
