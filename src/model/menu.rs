//! Menu items and their display format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Errors raised while building a [`MenuItem`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Prices must be zero or positive.
    #[error("Negative price for {name}: {price}")]
    NegativePrice { name: String, price: Decimal },
}

/// A single dish on a restaurant's menu.
///
/// Menu items are plain values: once built they never change, and carts hold
/// their own copies. Prices are exact decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: Decimal,
    category: String,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `name` - Dish name shown to the customer
    /// * `price` - Non-negative unit price
    /// * `category` - Free-form grouping such as "Main" or "Side"
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, MenuError> {
        let name = name.into();
        if price.is_sign_negative() && !price.is_zero() {
            return Err(MenuError::NegativePrice { name, price });
        }
        Ok(Self {
            name,
            price,
            category: category.into(),
        })
    }

    /// For literal prices known to be valid.
    pub(crate) fn new_unchecked(name: &str, price: Decimal, category: &str) -> Self {
        debug_assert!(!price.is_sign_negative() || price.is_zero());
        Self {
            name: name.to_string(),
            price,
            category: category.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - ${:.2}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_uses_two_decimals() {
        let item = MenuItem::new("Fries", dec!(3.99), "Side").unwrap();
        assert_eq!(item.to_string(), "Fries - $3.99");

        let whole = MenuItem::new("Water", dec!(2), "Drink").unwrap();
        assert_eq!(whole.to_string(), "Water - $2.00");
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = MenuItem::new("Refund", dec!(-1.00), "Misc").unwrap_err();
        assert_eq!(
            err,
            MenuError::NegativePrice {
                name: "Refund".to_string(),
                price: dec!(-1.00)
            }
        );
    }

    #[test]
    fn test_free_item_allowed() {
        let item = MenuItem::new("Napkins", dec!(0), "Extras").unwrap();
        assert_eq!(item.price(), dec!(0));
        assert_eq!(item.category(), "Extras");
    }
}
