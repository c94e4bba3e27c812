/// A placed order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::{Cart, Clock, DeliveryEstimator, OrderStatus, TrackingNumbers};
use chrono::{DateTime, Duration, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Time format used wherever a delivery estimate is shown to a customer.
pub const DELIVERY_TIME_FORMAT: &str = "%H:%M";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackingNumber(pub String);

impl TrackingNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackingNumber {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the customer intends to pay on delivery. Nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => f.write_str("Cash"),
            PaymentMethod::Card => f.write_str("Card"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(UnknownPaymentMethod(s.trim().to_string())),
        }
    }
}

/// Reasons a cart cannot become an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("A delivery address is required")]
    MissingAddress,

    #[error("Delivery estimate of {minutes} minutes is out of range")]
    DeliveryOutOfRange { minutes: i64 },
}

/// Errors raised by a placed order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order {tracking_number} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        tracking_number: TrackingNumber,
        from: OrderStatus,
        to: OrderStatus,
    },
}

#[derive(Debug, Clone)]
pub struct Order {
    tracking_number: TrackingNumber,
    cart: Cart,
    delivery_address: String,
    payment_method: PaymentMethod,
    status: OrderStatus,
    order_time: DateTime<Local>,
    estimated_delivery_time: DateTime<Local>,
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart: Cart,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Builds an order from an already-timed checkout.
    ///
    /// # Arguments
    /// * `tracking_number` - Unique identifier for later lookup
    /// * `params` - Cart, address and payment method
    /// * `order_time` - Instant the order was placed
    /// * `delivery_in` - Offset from `order_time` to the estimated arrival
    ///
    /// # Errors
    /// Fails with [`CheckoutError::EmptyCart`] or [`CheckoutError::MissingAddress`],
    /// or [`CheckoutError::DeliveryOutOfRange`] when the estimate overflows the calendar.
    pub fn new(
        tracking_number: TrackingNumber,
        params: OrderCreate,
        order_time: DateTime<Local>,
        delivery_in: Duration,
    ) -> Result<Self, CheckoutError> {
        if params.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let delivery_address = params.delivery_address.trim();
        if delivery_address.is_empty() {
            return Err(CheckoutError::MissingAddress);
        }
        let estimated_delivery_time = order_time
            .checked_add_signed(delivery_in)
            .ok_or(CheckoutError::DeliveryOutOfRange {
                minutes: delivery_in.num_minutes(),
            })?;
        Ok(Self {
            tracking_number,
            delivery_address: delivery_address.to_string(),
            cart: params.cart,
            payment_method: params.payment_method,
            status: OrderStatus::Processing,
            order_time,
            estimated_delivery_time,
        })
    }

    pub fn tracking_number(&self) -> &TrackingNumber {
        &self.tracking_number
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn restaurant_name(&self) -> &str {
        self.cart.restaurant().name()
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn order_time(&self) -> DateTime<Local> {
        self.order_time
    }

    pub fn estimated_delivery_time(&self) -> DateTime<Local> {
        self.estimated_delivery_time
    }

    /// Moves the order to `status` if the transition table allows it.
    pub fn update_status(&mut self, status: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(status) {
            return Err(OrderError::InvalidStatusTransition {
                tracking_number: self.tracking_number.clone(),
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }

    /// Message shown to the customer right after checkout.
    pub fn confirmation(&self) -> String {
        format!(
            "Order placed!\nTracking Number: {}\nEstimated Delivery: {}",
            self.tracking_number,
            self.estimated_delivery_time.format(DELIVERY_TIME_FORMAT)
        )
    }

    /// Tracking block for this order, terminated by a separator line.
    pub fn tracking_entry(&self) -> String {
        format!(
            "Tracking #: {}\nRestaurant: {}\nItems:\n{}Status: {}\nEstimated Delivery: {}\nAddress: {}\n------------------------\n",
            self.tracking_number,
            self.restaurant_name(),
            self.cart.items_list(),
            self.status,
            self.estimated_delivery_time.format(DELIVERY_TIME_FORMAT),
            self.delivery_address,
        )
    }
}

/// Turns carts into orders using injected time sources.
#[derive(Debug)]
pub struct Checkout {
    clock: Box<dyn Clock>,
    estimator: Box<dyn DeliveryEstimator>,
    tracking_numbers: TrackingNumbers,
}

impl Checkout {
    pub fn new(
        clock: impl Clock + 'static,
        estimator: impl DeliveryEstimator + 'static,
        tracking_numbers: TrackingNumbers,
    ) -> Self {
        Self {
            clock: Box::new(clock),
            estimator: Box::new(estimator),
            tracking_numbers,
        }
    }

    /// Places an order with a freshly issued tracking number.
    pub fn place(&self, params: OrderCreate) -> Result<Order, CheckoutError> {
        self.place_as(self.tracking_numbers.next_number(), params)
    }

    /// Places an order under a tracking number issued elsewhere.
    pub fn place_as(
        &self,
        tracking_number: TrackingNumber,
        params: OrderCreate,
    ) -> Result<Order, CheckoutError> {
        Order::new(
            tracking_number,
            params,
            self.clock.now(),
            self.estimator.estimate(),
        )
    }

    pub fn tracking_numbers(&self) -> &TrackingNumbers {
        &self.tracking_numbers
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(
            crate::model::SystemClock,
            crate::model::RandomDeliveryWindow::default(),
            TrackingNumbers::default(),
        )
    }
}
