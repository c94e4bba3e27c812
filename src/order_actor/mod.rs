//! Order-specific resource logic and entity implementation.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Checkout, Order};
use std::sync::Arc;

/// Creates a new Order actor and its client.
///
/// Tracking numbers are drawn from `checkout`'s counter, so they stay unique
/// however quickly orders arrive. Pass the same `checkout` in the actor's
/// [`OrderContext`].
pub fn new(buffer_size: usize, checkout: Arc<Checkout>) -> (ResourceActor<Order>, OrderClient) {
    let next_tracking_number = move || checkout.tracking_numbers().next_number();

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_tracking_number);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
