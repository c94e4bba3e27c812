//! Custom actions for the Order actor.

use crate::model::{OrderError, OrderStatus};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order along its status lifecycle.
    UpdateStatus(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
///
/// A refused transition is part of the result rather than an action failure,
/// so callers get the typed [`OrderError`] back across the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The status the order left, or why it could not move.
    UpdateStatus(Result<OrderStatus, OrderError>),
}
