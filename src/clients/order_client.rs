use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CheckoutError, Order, OrderCreate, OrderStatus, TrackingNumber};
use crate::order_actor::{OrderAction, OrderActionResult, OrderActorError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Order timing and restaurant validation happen in the Order actor's
/// `from_create_params` and `on_create` hooks. Checks that need nothing but the
/// request itself run here first so callers get typed errors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns its tracking number.
    #[instrument(skip(self, order), fields(restaurant = %order.cart.restaurant().name()))]
    pub async fn place_order(&self, order: OrderCreate) -> Result<TrackingNumber, OrderActorError> {
        debug!(?order, "place_order called");
        if order.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }
        if order.delivery_address.trim().is_empty() {
            return Err(CheckoutError::MissingAddress.into());
        }

        info!(total = %order.cart.total(), "Sending place_order to actor");
        self.inner.create(order).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => OrderActorError::Rejected(msg),
            other => Self::map_error(other),
        })
    }

    /// Moves an order to `status`, returning the status it left.
    ///
    /// The actor applies the transition table, so concurrent updates to the
    /// same order are decided in arrival order and the loser gets
    /// [`OrderError::InvalidStatusTransition`].
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        tracking_number: TrackingNumber,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderActorError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(tracking_number, OrderAction::UpdateStatus(status))
            .await
            .map_err(|e| match e {
                FrameworkError::Custom(msg) => OrderActorError::Rejected(msg),
                other => Self::map_error(other),
            })?;

        match result {
            OrderActionResult::UpdateStatus(outcome) => Ok(outcome?),
        }
    }

    /// Tracking entries for every order, oldest first.
    pub async fn tracking_report(&self) -> Result<String, OrderActorError> {
        let orders = self.list().await?;
        Ok(orders.iter().map(Order::tracking_entry).collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderActorError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderActorError::NotFound(id),
            other => OrderActorError::ActorCommunicationError(other.to_string()),
        }
    }
}
