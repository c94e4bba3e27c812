//! Error types for the Order actor.

use crate::model::{CheckoutError, OrderError};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderActorError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The cart or address cannot be turned into an order.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The order refused a status change.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The actor refused the request (e.g. unknown restaurant or item).
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderActorError {
    fn from(msg: String) -> Self {
        OrderActorError::ActorCommunicationError(msg)
    }
}
