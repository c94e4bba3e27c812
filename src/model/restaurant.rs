/// A restaurant and its menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for details on:
/// - Creation parameters ([`RestaurantCreate`])
/// - Custom actions ([`RestaurantAction`](crate::restaurant_actor::RestaurantAction))
use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    menu: Vec<MenuItem>,
}

/// Payload for registering a restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Creates a Restaurant with an empty menu.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by whoever owns the restaurant list)
    /// * `name` - Display name
    pub fn new(id: RestaurantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            menu: Vec::new(),
        }
    }

    /// Builder-style variant of [`Restaurant::add_menu_item`].
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.add_menu_item(item);
        self
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an item to the end of the menu. Duplicate names are allowed.
    pub fn add_menu_item(&mut self, item: MenuItem) {
        self.menu.push(item);
    }

    /// The menu in display order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// The item shown at `index`, if any.
    pub fn menu_item(&self, index: usize) -> Option<&MenuItem> {
        self.menu.get(index)
    }

    pub fn offers(&self, item: &MenuItem) -> bool {
        self.menu.contains(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_menu_keeps_insertion_order() {
        let mut restaurant = Restaurant::new(RestaurantId(1), "Burger Bonanza");
        restaurant.add_menu_item(MenuItem::new("Cheeseburger", dec!(8.99), "Main").unwrap());
        restaurant.add_menu_item(MenuItem::new("Fries", dec!(3.99), "Side").unwrap());
        restaurant.add_menu_item(MenuItem::new("Fries", dec!(3.99), "Side").unwrap());

        let names: Vec<&str> = restaurant.menu().iter().map(MenuItem::name).collect();
        assert_eq!(names, vec!["Cheeseburger", "Fries", "Fries"]);
        assert_eq!(restaurant.menu_item(0).map(MenuItem::name), Some("Cheeseburger"));
        assert!(restaurant.menu_item(3).is_none());
    }

    #[test]
    fn test_offers_compares_whole_item() {
        let restaurant = Restaurant::new(RestaurantId(7), "Pizza Palace")
            .with_item(MenuItem::new("Garlic Bread", dec!(4.99), "Side").unwrap());

        assert!(restaurant.offers(&MenuItem::new("Garlic Bread", dec!(4.99), "Side").unwrap()));
        assert!(!restaurant.offers(&MenuItem::new("Garlic Bread", dec!(1.00), "Side").unwrap()));
        assert_eq!(restaurant.id().to_string(), "restaurant_7");
    }
}
