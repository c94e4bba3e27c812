//! # Food Order Demo
//!
//! Walks through the ordering flow against the actor-backed [`OrderSystem`]:
//! 1. Register the demo restaurants.
//! 2. Fill a cart from Pizza Palace and check out.
//! 3. Move the order along and print the tracking report.

use food_order::clients::actor_client::ActorClient;
use food_order::config::AppConfig;
use food_order::lifecycle::{setup_tracing, OrderSystem};
use food_order::model::{Cart, OrderCreate, OrderStatus, PaymentMethod};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting food order system");

    let system = OrderSystem::from_config(&config).map_err(|e| e.to_string())?;

    let restaurant_ids = async {
        info!("Registering restaurants");
        system.seed_catalog().await.map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("catalog"))
    .await?;

    let restaurants = system
        .restaurant_client
        .list()
        .await
        .map_err(|e| e.to_string())?;
    for restaurant in &restaurants {
        println!("{} ({})", restaurant.name(), restaurant.id());
        let menu = system
            .restaurant_client
            .menu(restaurant.id())
            .await
            .map_err(|e| e.to_string())?;
        for (index, item) in menu.iter().enumerate() {
            println!("  [{index}] {item}");
        }
    }

    let first_id = restaurant_ids.first().copied().ok_or("No restaurants registered")?;
    let pizza_palace = system
        .restaurant_client
        .get(first_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or("Pizza Palace was not registered")?;

    let mut cart = Cart::new(Arc::new(pizza_palace));
    for index in [0, 2] {
        cart.add_menu_index(index).map_err(|e| e.to_string())?;
    }
    println!("\n{}\n", cart.summary());

    let order_result = async {
        info!("Placing order");
        system
            .order_client
            .place_order(OrderCreate {
                cart,
                delivery_address: "123 Main St".to_string(),
                payment_method: PaymentMethod::Card,
            })
            .await
    }
    .instrument(tracing::info_span!("checkout"))
    .await;

    match order_result {
        Ok(tracking_number) => {
            info!(%tracking_number, "Order placed successfully");
            if let Some(order) = system
                .order_client
                .get(tracking_number.clone())
                .await
                .map_err(|e| e.to_string())?
            {
                println!("{}\n", order.confirmation());
            }

            for status in [OrderStatus::Preparing, OrderStatus::OutForDelivery] {
                system
                    .order_client
                    .update_status(tracking_number.clone(), status)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }
        Err(e) => error!(error = %e, "Order placement failed"),
    }

    let report = system
        .order_client
        .tracking_report()
        .await
        .map_err(|e| e.to_string())?;
    print!("{report}");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
