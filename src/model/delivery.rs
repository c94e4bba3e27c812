//! Time sources used when an order is placed.
//!
//! Order placement needs three things from the outside world: the current
//! time, a delivery estimate and a fresh tracking number. Each sits behind a
//! small trait or type here so tests can pin them down.

use chrono::{DateTime, Duration, Local};
use rand::Rng;
use std::fmt::Debug;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::TrackingNumber;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Local>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Produces the time between placing an order and its expected arrival.
pub trait DeliveryEstimator: Send + Sync + Debug {
    fn estimate(&self) -> Duration;
}

/// Uniform draw, in whole minutes, from an inclusive window.
#[derive(Debug, Clone)]
pub struct RandomDeliveryWindow {
    minutes: RangeInclusive<i64>,
}

impl RandomDeliveryWindow {
    pub const DEFAULT_MIN_MINUTES: i64 = 30;
    pub const DEFAULT_MAX_MINUTES: i64 = 60;
    /// Longest estimate a window may produce: one day.
    pub const LIMIT_MINUTES: i64 = 24 * 60;

    /// Returns `None` when the window is empty, starts below zero or ends past
    /// [`Self::LIMIT_MINUTES`].
    pub fn new(min_minutes: i64, max_minutes: i64) -> Option<Self> {
        if min_minutes < 0 || min_minutes > max_minutes || max_minutes > Self::LIMIT_MINUTES {
            return None;
        }
        Some(Self {
            minutes: min_minutes..=max_minutes,
        })
    }

    pub fn min_minutes(&self) -> i64 {
        *self.minutes.start()
    }

    pub fn max_minutes(&self) -> i64 {
        *self.minutes.end()
    }
}

impl Default for RandomDeliveryWindow {
    fn default() -> Self {
        Self {
            minutes: Self::DEFAULT_MIN_MINUTES..=Self::DEFAULT_MAX_MINUTES,
        }
    }
}

impl DeliveryEstimator for RandomDeliveryWindow {
    fn estimate(&self) -> Duration {
        let minutes = rand::thread_rng().gen_range(self.minutes.clone());
        Duration::minutes(minutes)
    }
}

/// Always returns the same estimate.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelivery(pub Duration);

impl DeliveryEstimator for FixedDelivery {
    fn estimate(&self) -> Duration {
        self.0
    }
}

/// Hands out tracking numbers from a monotonic counter.
///
/// Numbers are unique for the life of the generator, no matter how quickly
/// they are requested.
#[derive(Debug)]
pub struct TrackingNumbers {
    prefix: String,
    next: AtomicU64,
}

impl TrackingNumbers {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    pub fn next_number(&self) -> TrackingNumber {
        let seq = self.next.fetch_add(1, Ordering::SeqCst);
        TrackingNumber(format!("{}{:06}", self.prefix, seq))
    }
}

impl Default for TrackingNumbers {
    fn default() -> Self {
        Self::new("ORD")
    }
}
