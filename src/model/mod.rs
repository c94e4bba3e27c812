//! Pure data structures: menus, carts, orders and the order book.
//!
//! [`Restaurant`] and [`Order`] also implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait so they can be owned by actors.

pub mod cart;
pub mod delivery;
pub mod menu;
pub mod order;
pub mod order_book;
pub mod restaurant;
pub mod status;

pub use cart::*;
pub use delivery::*;
pub use menu::*;
pub use order::*;
pub use order_book::*;
pub use restaurant::*;
pub use status::*;
