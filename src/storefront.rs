//! Single-user application state.
//!
//! A [`Storefront`] holds everything a presentation layer needs between user
//! actions: the restaurant list, the cart being filled and the order book.
//! It is passed around by `&mut` and never shared across threads.

use crate::model::{
    Cart, CartError, Checkout, CheckoutError, MenuItem, Order, OrderBook, OrderBookError,
    OrderCreate, OrderStatus, PaymentMethod, Restaurant, TrackingNumber,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("No restaurant at index {0}")]
    UnknownRestaurant(usize),

    #[error("No restaurant selected")]
    NoActiveCart,

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    OrderBook(#[from] OrderBookError),
}

#[derive(Debug)]
pub struct Storefront {
    restaurants: Vec<Arc<Restaurant>>,
    current_cart: Option<Cart>,
    orders: OrderBook,
    checkout: Checkout,
}

impl Storefront {
    pub fn new(restaurants: Vec<Restaurant>, checkout: Checkout) -> Self {
        Self {
            restaurants: restaurants.into_iter().map(Arc::new).collect(),
            current_cart: None,
            orders: OrderBook::new(),
            checkout,
        }
    }

    /// The demo restaurants with the real clock and a random delivery window.
    pub fn with_seed_catalog() -> Self {
        Self::new(crate::catalog::seed_restaurants(), Checkout::default())
    }

    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> + '_ {
        self.restaurants.iter().map(Arc::as_ref)
    }

    /// Appends an item to a restaurant's menu. Carts already open keep the
    /// menu they were started with.
    pub fn add_menu_item(&mut self, restaurant: usize, item: MenuItem) -> Result<(), StorefrontError> {
        let slot = self
            .restaurants
            .get_mut(restaurant)
            .ok_or(StorefrontError::UnknownRestaurant(restaurant))?;
        Arc::make_mut(slot).add_menu_item(item);
        Ok(())
    }

    /// Starts a fresh cart for the restaurant at `index`, discarding any open cart.
    pub fn select_restaurant(&mut self, index: usize) -> Result<&Cart, StorefrontError> {
        let restaurant = self
            .restaurants
            .get(index)
            .cloned()
            .ok_or(StorefrontError::UnknownRestaurant(index))?;
        debug!(restaurant = restaurant.name(), "Restaurant selected");
        Ok(&*self.current_cart.insert(Cart::new(restaurant)))
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.current_cart.as_ref()
    }

    /// Adds the item at `menu_index` of the selected restaurant to the cart.
    pub fn add_to_cart(&mut self, menu_index: usize) -> Result<&Cart, StorefrontError> {
        let cart = self
            .current_cart
            .as_mut()
            .ok_or(StorefrontError::NoActiveCart)?;
        let item = cart.add_menu_index(menu_index)?;
        debug!(%item, "Added to cart");
        Ok(&*cart)
    }

    /// Turns the open cart into an order.
    ///
    /// The cart is only consumed when the order is accepted; on error it stays
    /// open so the customer can fix the problem.
    pub fn checkout(
        &mut self,
        delivery_address: &str,
        payment_method: PaymentMethod,
    ) -> Result<&Order, StorefrontError> {
        let cart = self
            .current_cart
            .as_ref()
            .ok_or(StorefrontError::NoActiveCart)?
            .clone();

        let order = self
            .checkout
            .place(OrderCreate {
                cart,
                delivery_address: delivery_address.to_string(),
                payment_method,
            })
            .inspect_err(|e| warn!(error = %e, "Checkout rejected"))?;
        let order = self
            .orders
            .place(order)
            .inspect_err(|e| warn!(error = %e, "Order book refused order"))?;
        self.current_cart = None;
        info!(
            tracking_number = %order.tracking_number(),
            total = %order.total(),
            "Order placed"
        );
        Ok(order)
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.list_all()
    }

    pub fn find_order(&self, tracking_number: &TrackingNumber) -> Option<&Order> {
        self.orders.find(tracking_number)
    }

    pub fn update_status(
        &mut self,
        tracking_number: &TrackingNumber,
        status: OrderStatus,
    ) -> Result<&Order, StorefrontError> {
        let order = self.orders.update_status(tracking_number, status)?;
        info!(%tracking_number, %status, "Status updated");
        Ok(order)
    }

    pub fn tracking_report(&self) -> String {
        self.orders.tracking_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FixedClock, FixedDelivery, RestaurantId, TrackingNumbers};
    use chrono::{Duration, Local, TimeZone};
    use rust_decimal_macros::dec;

    fn storefront() -> Storefront {
        Storefront::new(
            crate::catalog::seed_restaurants(),
            Checkout::new(
                FixedClock(Local.with_ymd_and_hms(2024, 5, 1, 19, 15, 0).unwrap()),
                FixedDelivery(Duration::minutes(35)),
                TrackingNumbers::default(),
            ),
        )
    }

    #[test]
    fn test_failed_checkout_keeps_cart() {
        let mut store = storefront();
        store.select_restaurant(0).unwrap();

        assert_eq!(
            store.checkout("123 Main St", PaymentMethod::Cash).unwrap_err(),
            StorefrontError::Checkout(CheckoutError::EmptyCart)
        );
        store.add_to_cart(1).unwrap();
        assert_eq!(
            store.checkout("", PaymentMethod::Cash).unwrap_err(),
            StorefrontError::Checkout(CheckoutError::MissingAddress)
        );
        assert_eq!(store.cart().map(Cart::total), Some(dec!(10.99)));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_refused_order_keeps_cart() {
        let mut store = storefront();

        // Occupy the tracking number the storefront will issue next
        let mut cart = Cart::new(Arc::new(crate::catalog::pizza_palace(RestaurantId(1))));
        cart.add_menu_index(0).unwrap();
        let taken = Checkout::default()
            .place(OrderCreate {
                cart,
                delivery_address: "1 Taken Rd".to_string(),
                payment_method: PaymentMethod::Cash,
            })
            .unwrap();
        store.orders.place(taken).unwrap();

        store.select_restaurant(1).unwrap();
        store.add_to_cart(2).unwrap();
        assert_eq!(
            store.checkout("2 Free Rd", PaymentMethod::Card).unwrap_err(),
            StorefrontError::OrderBook(OrderBookError::DuplicateTrackingNumber(
                TrackingNumber::from("ORD000001")
            ))
        );
        assert_eq!(store.cart().map(|c| c.items().len()), Some(1));
        assert_eq!(store.orders().len(), 1);

        // The next number is free, so the same cart goes through
        let order = store.checkout("2 Free Rd", PaymentMethod::Card).unwrap();
        assert_eq!(order.tracking_number().as_str(), "ORD000002");
        assert!(store.cart().is_none());
    }

    #[test]
    fn test_checkout_without_cart() {
        let mut store = storefront();
        assert_eq!(
            store.checkout("123 Main St", PaymentMethod::Card).unwrap_err(),
            StorefrontError::NoActiveCart
        );
        assert_eq!(store.add_to_cart(0).unwrap_err(), StorefrontError::NoActiveCart);
        assert_eq!(
            store.select_restaurant(5).unwrap_err(),
            StorefrontError::UnknownRestaurant(5)
        );
    }

    #[test]
    fn test_menu_change_does_not_touch_open_cart() {
        let mut store = storefront();
        store.select_restaurant(1).unwrap();
        store
            .add_menu_item(1, MenuItem::new("Onion Rings", dec!(4.49), "Side").unwrap())
            .unwrap();

        assert_eq!(store.restaurants().nth(1).map(|r| r.menu().len()), Some(4));
        assert_eq!(store.cart().map(|c| c.restaurant().menu().len()), Some(3));
        assert!(matches!(
            store.add_to_cart(3),
            Err(StorefrontError::Cart(CartError::NoSuchMenuIndex { index: 3, .. }))
        ));

        store.select_restaurant(1).unwrap();
        assert_eq!(store.add_to_cart(3).unwrap().total(), dec!(4.49));
    }
}
