//! Runtime configuration read from the environment.

use crate::model::RandomDeliveryWindow;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Delivery window is empty: {min}..={max} minutes")]
    EmptyDeliveryWindow { min: i64, max: i64 },

    #[error("Delivery window ends at {max} minutes, limit is {limit}")]
    DeliveryWindowTooLong { max: i64, limit: i64 },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("Tracking prefix must not be empty")]
    EmptyTrackingPrefix,
}

/// Order system configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Request buffer per actor
    pub mailbox_size: usize,

    /// Earliest delivery estimate, minutes after the order is placed
    pub delivery_min_minutes: i64,

    /// Latest delivery estimate (inclusive)
    pub delivery_max_minutes: i64,

    /// Prepended to every tracking number
    pub tracking_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            delivery_min_minutes: RandomDeliveryWindow::DEFAULT_MIN_MINUTES,
            delivery_max_minutes: RandomDeliveryWindow::DEFAULT_MAX_MINUTES,
            tracking_prefix: "ORD".to_string(),
        }
    }
}

impl AppConfig {
    pub const MAILBOX_SIZE: &'static str = "FOOD_ORDER_MAILBOX_SIZE";
    pub const DELIVERY_MIN_MINUTES: &'static str = "FOOD_ORDER_DELIVERY_MIN_MINUTES";
    pub const DELIVERY_MAX_MINUTES: &'static str = "FOOD_ORDER_DELIVERY_MAX_MINUTES";
    pub const TRACKING_PREFIX: &'static str = "FOOD_ORDER_TRACKING_PREFIX";

    /// Create config from environment variables, falling back to defaults for unset keys
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            mailbox_size: parse_or(&lookup, Self::MAILBOX_SIZE, defaults.mailbox_size)?,
            delivery_min_minutes: parse_or(
                &lookup,
                Self::DELIVERY_MIN_MINUTES,
                defaults.delivery_min_minutes,
            )?,
            delivery_max_minutes: parse_or(
                &lookup,
                Self::DELIVERY_MAX_MINUTES,
                defaults.delivery_max_minutes,
            )?,
            tracking_prefix: lookup(Self::TRACKING_PREFIX).unwrap_or(defaults.tracking_prefix),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_size == 0 {
            return Err(ConfigError::Zero(Self::MAILBOX_SIZE));
        }
        self.delivery_window()?;
        if self.tracking_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyTrackingPrefix);
        }
        Ok(())
    }

    pub fn delivery_window(&self) -> Result<RandomDeliveryWindow, ConfigError> {
        if self.delivery_max_minutes > RandomDeliveryWindow::LIMIT_MINUTES {
            return Err(ConfigError::DeliveryWindowTooLong {
                max: self.delivery_max_minutes,
                limit: RandomDeliveryWindow::LIMIT_MINUTES,
            });
        }
        RandomDeliveryWindow::new(self.delivery_min_minutes, self.delivery_max_minutes).ok_or(
            ConfigError::EmptyDeliveryWindow {
                min: self.delivery_min_minutes,
                max: self.delivery_max_minutes,
            },
        )
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
