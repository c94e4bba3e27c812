use chrono::{Duration, Local, TimeZone};
use food_order::clients::actor_client::ActorClient;
use food_order::config::AppConfig;
use food_order::lifecycle::OrderSystem;
use food_order::model::{
    Cart, Checkout, FixedClock, FixedDelivery, MenuItem, OrderCreate, OrderError, OrderStatus,
    PaymentMethod, RestaurantId, TrackingNumbers,
};
use food_order::order_actor::OrderActorError;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;

fn fixed_system() -> OrderSystem {
    let checkout = Checkout::new(
        FixedClock(Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        FixedDelivery(Duration::minutes(50)),
        TrackingNumbers::default(),
    );
    OrderSystem::start(&AppConfig::default(), checkout)
}

/// Full end-to-end integration test with all real actors.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = fixed_system();

    // Register the demo restaurants
    let ids = system.seed_catalog().await.expect("Failed to seed catalog");
    assert_eq!(ids.len(), 2);

    let pizza_palace = system
        .restaurant_client
        .get(ids[0])
        .await
        .expect("Failed to get restaurant")
        .expect("Restaurant not found");
    assert_eq!(pizza_palace.name(), "Pizza Palace");

    // Build the cart from the actor's copy of the menu
    let mut cart = Cart::new(Arc::new(pizza_palace));
    cart.add_menu_index(0).unwrap();
    cart.add_menu_index(2).unwrap();
    assert_eq!(cart.total(), dec!(17.98));
    assert_eq!(cart.items_list(), "Pepperoni Pizza - $12.99\nGarlic Bread - $4.99\n");

    let tracking_number = system
        .order_client
        .place_order(OrderCreate {
            cart,
            delivery_address: "123 Main St".to_string(),
            payment_method: PaymentMethod::Card,
        })
        .await
        .expect("Failed to place order");

    let order = system
        .order_client
        .get(tracking_number.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.status(), OrderStatus::Processing);
    assert_eq!(order.delivery_address(), "123 Main St");
    assert_eq!(order.total(), dec!(17.98));
    assert_eq!(order.estimated_delivery_time() - order.order_time(), Duration::minutes(50));
    assert_eq!(
        order.confirmation(),
        format!("Order placed!\nTracking Number: {tracking_number}\nEstimated Delivery: 12:50")
    );

    // Status moves forward, then sticks once delivered
    let previous = system
        .order_client
        .update_status(tracking_number.clone(), OrderStatus::Delivered)
        .await
        .expect("Failed to update status");
    assert_eq!(previous, OrderStatus::Processing);

    let result = system
        .order_client
        .update_status(tracking_number.clone(), OrderStatus::Cancelled)
        .await;
    assert!(matches!(
        result,
        Err(OrderActorError::Order(OrderError::InvalidStatusTransition { .. }))
    ));

    let report = system.order_client.tracking_report().await.unwrap();
    assert!(report.contains("Restaurant: Pizza Palace\n"));
    assert!(report.contains("Status: Delivered\n"));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Carts built from a restaurant the actor never saw are refused.
#[tokio::test]
async fn test_unregistered_restaurant_rejected() {
    let system = fixed_system();

    // No catalog registered: restaurant_1 does not exist yet
    let mut cart = Cart::new(Arc::new(food_order::catalog::pizza_palace(RestaurantId(1))));
    cart.add_menu_index(1).unwrap();

    let result = system
        .order_client
        .place_order(OrderCreate {
            cart,
            delivery_address: "5 Side St".to_string(),
            payment_method: PaymentMethod::Cash,
        })
        .await;
    assert_eq!(
        result,
        Err(OrderActorError::Rejected("Restaurant not found: restaurant_1".to_string()))
    );
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// A cart whose restaurant was swapped for a different menu is refused.
#[tokio::test]
async fn test_item_missing_from_registered_menu_rejected() {
    let system = fixed_system();
    let ids = system.seed_catalog().await.unwrap();

    // Same id as the registered Pizza Palace, but with an extra dish
    let mut imposter = food_order::catalog::pizza_palace(ids[0]);
    imposter.add_menu_item(MenuItem::new("Lobster", dec!(40.00), "Main").unwrap());
    let mut cart = Cart::new(Arc::new(imposter));
    cart.add_menu_index(3).unwrap();

    let result = system
        .order_client
        .place_order(OrderCreate {
            cart,
            delivery_address: "5 Side St".to_string(),
            payment_method: PaymentMethod::Cash,
        })
        .await;
    assert_eq!(
        result,
        Err(OrderActorError::Rejected(
            "Lobster is not on the menu of Pizza Palace".to_string()
        ))
    );

    // Once the real menu has the dish, the order goes through
    system
        .restaurant_client
        .add_menu_item(ids[0], MenuItem::new("Lobster", dec!(40.00), "Main").unwrap())
        .await
        .unwrap();
    let menu = system.restaurant_client.menu(ids[0]).await.unwrap();
    assert_eq!(menu.len(), 4);
    assert_eq!(menu[3].name(), "Lobster");

    let registered = system.restaurant_client.get(ids[0]).await.unwrap().unwrap();
    let mut cart = Cart::new(Arc::new(registered));
    cart.add_menu_index(3).unwrap();
    assert!(system
        .order_client
        .place_order(OrderCreate {
            cart,
            delivery_address: "5 Side St".to_string(),
            payment_method: PaymentMethod::Cash,
        })
        .await
        .is_ok());

    system.shutdown().await.unwrap();
}

/// Concurrent checkouts all land, each with its own tracking number, in one list.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = OrderSystem::new();
    let ids = system.seed_catalog().await.unwrap();
    let burger_bonanza = Arc::new(
        system
            .restaurant_client
            .get(ids[1])
            .await
            .unwrap()
            .unwrap(),
    );

    let mut handles = vec![];
    for i in 0..10 {
        let order_client = system.order_client.clone();
        let restaurant = burger_bonanza.clone();

        handles.push(tokio::spawn(async move {
            let mut cart = Cart::new(restaurant);
            cart.add_menu_index(i % 3).unwrap();
            order_client
                .place_order(OrderCreate {
                    cart,
                    delivery_address: format!("{i} Queue Rd"),
                    payment_method: PaymentMethod::Cash,
                })
                .await
        }));
    }

    let mut tracking_numbers = HashSet::new();
    for handle in handles {
        tracking_numbers.insert(handle.await.unwrap().expect("Order failed"));
    }
    assert_eq!(tracking_numbers.len(), 10, "Tracking numbers must be unique");

    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders.len(), 10);
    for order in &orders {
        let offset = order.estimated_delivery_time() - order.order_time();
        assert!(offset >= Duration::minutes(30) && offset <= Duration::minutes(60));
    }

    system.shutdown().await.unwrap();
}

/// Two updates racing to finish the same order: one wins, the other gets the typed refusal.
#[tokio::test]
async fn test_racing_status_updates() {
    let system = fixed_system();
    let ids = system.seed_catalog().await.unwrap();
    let pizza_palace = system.restaurant_client.get(ids[0]).await.unwrap().unwrap();

    let mut cart = Cart::new(Arc::new(pizza_palace));
    cart.add_menu_index(1).unwrap();
    let tracking_number = system
        .order_client
        .place_order(OrderCreate {
            cart,
            delivery_address: "8 Race Ct".to_string(),
            payment_method: PaymentMethod::Cash,
        })
        .await
        .unwrap();

    let deliver = {
        let order_client = system.order_client.clone();
        let tracking_number = tracking_number.clone();
        tokio::spawn(async move {
            order_client
                .update_status(tracking_number, OrderStatus::Delivered)
                .await
        })
    };
    let cancel = {
        let order_client = system.order_client.clone();
        let tracking_number = tracking_number.clone();
        tokio::spawn(async move {
            order_client
                .update_status(tracking_number, OrderStatus::Cancelled)
                .await
        })
    };

    let results = [deliver.await.unwrap(), cancel.await.unwrap()];
    let won: Vec<_> = results.iter().filter(|r| r.is_ok()).collect();
    assert_eq!(won, vec![&Ok(OrderStatus::Processing)]);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(OrderActorError::Order(OrderError::InvalidStatusTransition {
            from: OrderStatus::Delivered | OrderStatus::Cancelled,
            ..
        }))
    )));

    let order = system.order_client.get(tracking_number).await.unwrap().unwrap();
    assert!(order.status().is_terminal());

    system.shutdown().await.unwrap();
}
