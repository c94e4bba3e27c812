//! Custom actions for the Restaurant actor.
//!
//! These actions are handled by the
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action) method.
//! See [`impl ActorEntity for Restaurant`](crate::model::Restaurant#impl-ActorEntity-for-Restaurant)
//! for the implementation details.

use crate::model::MenuItem;

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Appends an item to the end of the menu.
    AddMenuItem(MenuItem),
    /// Reads the current menu without changing it.
    Menu,
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone)]
pub enum RestaurantActionResult {
    /// Display index the new item landed at
    AddMenuItem(usize),
    /// The menu in display order
    Menu(Vec<MenuItem>),
}
