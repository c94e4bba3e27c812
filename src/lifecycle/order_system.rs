use crate::clients::{OrderClient, RestaurantClient};
use crate::config::{AppConfig, ConfigError};
use crate::model::{Checkout, RestaurantCreate, RestaurantId, SystemClock, TrackingNumbers};
use crate::order_actor::OrderContext;
use crate::restaurant_actor::RestaurantError;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the actor-backed ordering system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: The order actor validates carts against the restaurant actor
/// - **Resource Coordination**: Tracking number generation and the checkout time sources
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let ids = system.seed_catalog().await?;
///
/// let restaurant = system.restaurant_client.get(ids[0]).await?;
/// let tracking_number = system.order_client.place_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Restaurant actor
    pub restaurant_client: RestaurantClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with default settings and the real clock.
    pub fn new() -> Self {
        Self::start(&AppConfig::default(), Checkout::default())
    }

    /// Starts the system from validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let checkout = Checkout::new(
            SystemClock,
            config.delivery_window()?,
            TrackingNumbers::new(config.tracking_prefix.clone()),
        );
        Ok(Self::start(config, checkout))
    }

    /// Spawns both actors. `checkout` supplies order time, delivery estimates and
    /// tracking numbers, which lets tests pin them down.
    pub fn start(config: &AppConfig, checkout: Checkout) -> Self {
        // 1. Create actors (no dependencies yet)
        let checkout = Arc::new(checkout);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(config.mailbox_size);
        let (order_actor, order_client) =
            crate::order_actor::new(config.mailbox_size, checkout.clone());

        // 2. Start actors with injected context
        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            restaurant_client: restaurant_client.clone(),
            checkout,
        }));

        Self {
            restaurant_client,
            order_client,
            handles: vec![restaurant_handle, order_handle],
        }
    }

    /// Registers the demo restaurants and returns their IDs in display order.
    pub async fn seed_catalog(&self) -> Result<Vec<RestaurantId>, RestaurantError> {
        self.register_all(crate::catalog::seed_payloads()).await
    }

    pub async fn register_all(
        &self,
        restaurants: Vec<RestaurantCreate>,
    ) -> Result<Vec<RestaurantId>, RestaurantError> {
        let mut ids = Vec::with_capacity(restaurants.len());
        for restaurant in restaurants {
            ids.push(self.restaurant_client.create_restaurant(restaurant).await?);
        }
        Ok(ids)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains and exits its
    /// loop. The order actor holds its own restaurant client, so the restaurant
    /// actor only stops once the order actor has.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.restaurant_client);

        // Order actor first: it owns the last restaurant client.
        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
