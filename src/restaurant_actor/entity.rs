//! ActorEntity trait implementation for the Restaurant domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Restaurant`] to be managed by the generic [`crate::framework::ResourceActor`].

use super::actions::{RestaurantAction, RestaurantActionResult};
use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type CreateParams = RestaurantCreate;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Context = ();

    /// Creates a Restaurant with the given menu.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate, _ctx: &()) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Restaurant name must not be empty".to_string());
        }
        Ok(params
            .menu
            .into_iter()
            .fold(Restaurant::new(id, params.name), Restaurant::with_item))
    }

    /// Handles custom actions for the Restaurant entity.
    ///
    /// # Actions
    /// - `AddMenuItem`: Appends the item and returns its display index
    /// - `Menu`: Returns a copy of the menu
    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &(),
    ) -> Result<RestaurantActionResult, String> {
        match action {
            RestaurantAction::AddMenuItem(item) => {
                self.add_menu_item(item);
                Ok(RestaurantActionResult::AddMenuItem(self.menu().len() - 1))
            }
            RestaurantAction::Menu => Ok(RestaurantActionResult::Menu(self.menu().to_vec())),
        }
    }
}
