use chrono::{Duration, Local, TimeZone};
use food_order::model::{
    Checkout, FixedClock, FixedDelivery, OrderStatus, PaymentMethod, TrackingNumbers,
};
use food_order::storefront::{Storefront, StorefrontError};
use rust_decimal_macros::dec;

fn storefront() -> Storefront {
    Storefront::new(
        food_order::catalog::seed_restaurants(),
        Checkout::new(
            FixedClock(Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            FixedDelivery(Duration::minutes(30)),
            TrackingNumbers::default(),
        ),
    )
}

#[test]
fn test_pizza_palace_walkthrough() {
    let mut store = storefront();

    let names: Vec<&str> = store.restaurants().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Pizza Palace", "Burger Bonanza"]);

    store.select_restaurant(0).unwrap();
    store.add_to_cart(0).unwrap();
    let cart = store.add_to_cart(2).unwrap();
    assert_eq!(cart.total(), dec!(17.98));
    assert_eq!(cart.items_list(), "Pepperoni Pizza - $12.99\nGarlic Bread - $4.99\n");

    let order = store.checkout("123 Main St", PaymentMethod::Cash).unwrap();
    assert_eq!(order.status(), OrderStatus::Processing);
    assert!(!order.tracking_number().as_str().is_empty());
    assert_eq!(order.delivery_address(), "123 Main St");
    let tracking_number = order.tracking_number().clone();

    // The cart was consumed by checkout
    assert!(store.cart().is_none());

    store.update_status(&tracking_number, OrderStatus::Delivered).unwrap();
    assert_eq!(
        store.find_order(&tracking_number).map(|o| o.status()),
        Some(OrderStatus::Delivered)
    );

    assert_eq!(
        store.tracking_report(),
        "Tracking #: ORD000001\n\
         Restaurant: Pizza Palace\n\
         Items:\n\
         Pepperoni Pizza - $12.99\n\
         Garlic Bread - $4.99\n\
         Status: Delivered\n\
         Estimated Delivery: 12:30\n\
         Address: 123 Main St\n\
         ------------------------\n"
    );
}

#[test]
fn test_orders_listed_in_placement_order() {
    let mut store = storefront();

    for (restaurant, address) in [(1, "1 A St"), (0, "2 B St"), (1, "3 C St")] {
        store.select_restaurant(restaurant).unwrap();
        store.add_to_cart(1).unwrap();
        store.checkout(address, PaymentMethod::Card).unwrap();
    }

    let placed: Vec<(&str, &str)> = store
        .orders()
        .iter()
        .map(|o| (o.restaurant_name(), o.delivery_address()))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("Burger Bonanza", "1 A St"),
            ("Pizza Palace", "2 B St"),
            ("Burger Bonanza", "3 C St"),
        ]
    );

    let numbers: Vec<&str> = store.orders().iter().map(|o| o.tracking_number().as_str()).collect();
    assert_eq!(numbers, vec!["ORD000001", "ORD000002", "ORD000003"]);
}

#[test]
fn test_terminal_status_is_final() {
    let mut store = storefront();
    store.select_restaurant(0).unwrap();
    store.add_to_cart(1).unwrap();
    let tracking_number = store
        .checkout("9 Elm St", PaymentMethod::Cash)
        .unwrap()
        .tracking_number()
        .clone();

    store.update_status(&tracking_number, OrderStatus::Cancelled).unwrap();
    let err = store
        .update_status(&tracking_number, OrderStatus::OutForDelivery)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Order ORD000001 cannot move from Cancelled to Out for Delivery"
    );
    assert!(matches!(err, StorefrontError::OrderBook(_)));
}
