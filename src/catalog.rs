//! The restaurants the demo starts with.

use crate::model::{MenuItem, Restaurant, RestaurantCreate, RestaurantId};
use rust_decimal_macros::dec;

fn item(name: &str, price: rust_decimal::Decimal, category: &str) -> MenuItem {
    MenuItem::new_unchecked(name, price, category)
}

pub fn pizza_palace_menu() -> Vec<MenuItem> {
    vec![
        item("Pepperoni Pizza", dec!(12.99), "Main"),
        item("Cheese Pizza", dec!(10.99), "Main"),
        item("Garlic Bread", dec!(4.99), "Side"),
    ]
}

pub fn burger_bonanza_menu() -> Vec<MenuItem> {
    vec![
        item("Cheeseburger", dec!(8.99), "Main"),
        item("Fries", dec!(3.99), "Side"),
        item("Milkshake", dec!(4.99), "Drink"),
    ]
}

pub fn pizza_palace(id: RestaurantId) -> Restaurant {
    pizza_palace_menu()
        .into_iter()
        .fold(Restaurant::new(id, "Pizza Palace"), Restaurant::with_item)
}

pub fn burger_bonanza(id: RestaurantId) -> Restaurant {
    burger_bonanza_menu()
        .into_iter()
        .fold(Restaurant::new(id, "Burger Bonanza"), Restaurant::with_item)
}

/// Both demo restaurants, numbered from 1.
pub fn seed_restaurants() -> Vec<Restaurant> {
    vec![pizza_palace(RestaurantId(1)), burger_bonanza(RestaurantId(2))]
}

/// Creation payloads for registering the demo restaurants with an actor.
pub fn seed_payloads() -> Vec<RestaurantCreate> {
    vec![
        RestaurantCreate {
            name: "Pizza Palace".to_string(),
            menu: pizza_palace_menu(),
        },
        RestaurantCreate {
            name: "Burger Bonanza".to_string(),
            menu: burger_bonanza_menu(),
        },
    ]
}
