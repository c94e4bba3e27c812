#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Food Order
//!
//! > **Restaurant menus, carts, checkout and order tracking, in memory.**
//!
//! The crate models a small food-ordering flow: pick a restaurant, fill a cart from
//! its menu, check out with a delivery address, then follow the order's status.
//! Nothing is persisted and no payment is taken.
//!
//! ## 🚀 Core Concepts
//!
//! ### Exact money
//! Prices are [`rust_decimal::Decimal`]. A cart total is the exact sum of its items;
//! rounding to two places only happens when a value is formatted.
//!
//! ### Closed status lifecycle
//! [`OrderStatus`](model::OrderStatus) is an enum with a transition table. Orders move
//! forward (`Processing → Preparing → OutForDelivery → Delivered`) or get `Cancelled`;
//! `Delivered` and `Cancelled` are final.
//!
//! ### Injected time sources
//! [`Checkout`](model::Checkout) takes a [`Clock`](model::Clock), a
//! [`DeliveryEstimator`](model::DeliveryEstimator) and a
//! [`TrackingNumbers`](model::TrackingNumbers) counter. Tests swap in fixed values.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Model ([`model`], [`catalog`])
//! Menu items, restaurants, carts, orders and the append-only order book. All
//! synchronous, no I/O.
//!
//! ### 2. Application State ([`storefront`])
//! [`Storefront`](storefront::Storefront) bundles restaurants, the open cart and the
//! order book for a single-user front end.
//!
//! ### 3. The Engine ([`framework`])
//! A generic `ResourceActor<T>` that owns a collection of entities in one Tokio task.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 4. The Actors ([`restaurant_actor`], [`order_actor`]) and their [`clients`]
//! Restaurants and orders as actor-owned resources. The order actor checks every cart
//! against the restaurant actor before accepting it.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`OrderSystem`](lifecycle::OrderSystem) spawns and wires the actors;
//! [`AppConfig`](config::AppConfig) reads settings from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the console demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
pub mod storefront;
