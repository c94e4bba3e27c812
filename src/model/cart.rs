//! The in-progress selection a customer builds before checkout.

use crate::model::{MenuItem, Restaurant};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while filling a [`Cart`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The item is not on the menu of the restaurant the cart is bound to.
    #[error("{item} is not on the menu of {restaurant}")]
    InvalidItem { item: String, restaurant: String },

    /// The menu index does not point at an item.
    #[error("No menu item at index {index} for {restaurant}")]
    NoSuchMenuIndex { index: usize, restaurant: String },
}

/// Menu items selected from exactly one restaurant.
///
/// The restaurant is fixed when the cart is created. Items can only be
/// appended; there is no removal. A cart is consumed when it becomes an
/// [`Order`](crate::model::Order).
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    restaurant: Arc<Restaurant>,
    items: Vec<MenuItem>,
}

impl Cart {
    pub fn new(restaurant: Arc<Restaurant>) -> Self {
        Self {
            restaurant,
            items: Vec::new(),
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item`, which must be on the bound restaurant's menu.
    pub fn add_item(&mut self, item: MenuItem) -> Result<(), CartError> {
        if !self.restaurant.offers(&item) {
            return Err(CartError::InvalidItem {
                item: item.name().to_string(),
                restaurant: self.restaurant.name().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Appends the item displayed at `index` on the bound restaurant's menu.
    pub fn add_menu_index(&mut self, index: usize) -> Result<&MenuItem, CartError> {
        let item = self
            .restaurant
            .menu_item(index)
            .cloned()
            .ok_or_else(|| CartError::NoSuchMenuIndex {
                index,
                restaurant: self.restaurant.name().to_string(),
            })?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Exact sum of all item prices.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(MenuItem::price).sum()
    }

    /// One display line per item, in the order they were added.
    pub fn item_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(|item| format!("{item}\n"))
    }

    pub fn items_list(&self) -> String {
        self.item_lines().collect()
    }

    /// Items list followed by the formatted total.
    pub fn summary(&self) -> String {
        format!("{}\nTotal: ${:.2}", self.items_list(), self.total())
    }
}
