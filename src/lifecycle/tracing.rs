//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! providing hierarchical spans that show the request flow through the actors.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`. The compact format hides the module path
//! (`with_target(false)`); every actor log line carries an `entity_type` field instead.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actor framework
//! RUST_LOG=food_order::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown, with the final store size
//! - **Entity Operations**: Create, Get, List and custom Actions
//! - **Client Calls**: `#[instrument]` spans around each client method
//! - **Errors**: Rejected checkouts and refused status changes, with the reason
//!
//! ## Checkout Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Restaurant"
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Restaurant" id=restaurant_1 size=1
//! INFO checkout:place_order{restaurant=Pizza Palace}: Sending place_order to actor total=17.98
//! INFO Created entity_type="Order" id=ORD000001 size=1
//! ```
//!
//! **With `RUST_LOG=debug`** the order actor also shows its validation step:
//!
//! ```text
//! DEBUG Create entity_type="Order" params=OrderCreate { cart: Cart { .. }, delivery_address: "123 Main St", payment_method: Card }
//! DEBUG Get entity_type="Restaurant" id=restaurant_1 found=true
//! DEBUG Validating cart restaurant_id=restaurant_1 items=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise; entity_type identifies the actor
        .compact()
        .init();
}
