use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::ShoppingItemError;

/// Digits kept after the decimal point. Matches the `NUMERIC(12, 2)` column.
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound for a price, 10^10.
pub fn max_price() -> Decimal {
    Decimal::new(10_000_000_000, 0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(
        name: String,
        manufacturer: String,
        price: Decimal,
    ) -> Result<Self, ShoppingItemError> {
        if name.trim().is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }
        let price = Self::check_price(price)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            manufacturer,
            price,
            created_at: Utc::now(),
        })
    }

    /// Validates a price and returns it rescaled to [`PRICE_SCALE`] digits,
    /// so every store keeps exactly the value that was accepted.
    pub fn check_price(price: Decimal) -> Result<Decimal, ShoppingItemError> {
        if price < Decimal::ZERO {
            return Err(ShoppingItemError::NegativePrice);
        }
        if price.normalize().scale() > PRICE_SCALE || price >= max_price() {
            return Err(ShoppingItemError::PriceOutOfRange);
        }

        let mut price = price;
        price.rescale(PRICE_SCALE);
        Ok(price)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        manufacturer: String,
        price: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            manufacturer,
            price,
            created_at,
        }
    }
}
