//! ActorEntity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! Orders are built with the clock and delivery estimator from [`OrderContext`], then
//! checked against the restaurant actor before they are stored.

use super::actions::{OrderAction, OrderActionResult};
use crate::clients::{actor_client::ActorClient, RestaurantClient};
use crate::framework::ActorEntity;
use crate::model::{Checkout, Order, OrderCreate, TrackingNumber};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Dependencies injected into the Order actor at `run()` time.
#[derive(Clone)]
pub struct OrderContext {
    pub restaurant_client: RestaurantClient,
    pub checkout: Arc<Checkout>,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = TrackingNumber;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;

    /// Stamps the order with the current time and a delivery estimate.
    fn from_create_params(
        id: TrackingNumber,
        params: OrderCreate,
        ctx: &OrderContext,
    ) -> Result<Self, String> {
        ctx.checkout.place_as(id, params).map_err(|e| e.to_string())
    }

    /// Confirms the restaurant is registered and still offers every item in the cart.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), String> {
        let restaurant_id = self.cart().restaurant().id();
        let restaurant = ctx
            .restaurant_client
            .get(restaurant_id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("Restaurant not found: {restaurant_id}"))?;

        debug!(%restaurant_id, items = self.cart().items().len(), "Validating cart");
        if let Some(missing) = self.cart().items().iter().find(|item| !restaurant.offers(item)) {
            return Err(format!(
                "{} is not on the menu of {}",
                missing.name(),
                restaurant.name()
            ));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::UpdateStatus(to) => {
                let from = self.status();
                let outcome = self.update_status(to).map(|()| from);
                if let Err(e) = &outcome {
                    debug!(error = %e, "Status change refused");
                }
                Ok(OrderActionResult::UpdateStatus(outcome))
            }
        }
    }
}
