use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{MenuItem, Restaurant, RestaurantCreate, RestaurantId};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, restaurant), fields(name = %restaurant.name))]
    pub async fn create_restaurant(
        &self,
        restaurant: RestaurantCreate,
    ) -> Result<RestaurantId, RestaurantError> {
        debug!(menu_items = restaurant.menu.len(), "Sending request");
        self.inner
            .create(restaurant)
            .await
            .map_err(|e| match e {
                FrameworkError::Custom(msg) => RestaurantError::ValidationError(msg),
                other => Self::map_error(other),
            })
    }

    /// Appends `item` to the menu and returns its display index.
    #[instrument(skip(self, item), fields(item = %item))]
    pub async fn add_menu_item(
        &self,
        id: RestaurantId,
        item: MenuItem,
    ) -> Result<usize, RestaurantError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, RestaurantAction::AddMenuItem(item))
            .await
            .map_err(Self::map_error)?;

        match result {
            RestaurantActionResult::AddMenuItem(index) => Ok(index),
            _ => Err(RestaurantError::UnexpectedResponse),
        }
    }

    #[instrument(skip(self))]
    pub async fn menu(&self, id: RestaurantId) -> Result<Vec<MenuItem>, RestaurantError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, RestaurantAction::Menu)
            .await
            .map_err(Self::map_error)?;

        match result {
            RestaurantActionResult::Menu(menu) => Ok(menu),
            _ => Err(RestaurantError::UnexpectedResponse),
        }
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
            other => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
