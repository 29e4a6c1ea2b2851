//! Line item type.

use std::num::NonZeroU32;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in a cart.
///
/// Display fields and price are snapshotted when the item is added and are
/// never re-synced with the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product identifier; unique within a cart.
    pub id: ProductId,
    /// Product title at add-time.
    pub title: String,
    /// Unit price at add-time.
    pub price: Money,
    /// Display image URL.
    pub image: String,
    /// Number of units, never zero.
    pub quantity: NonZeroU32,
}

impl LineItem {
    /// Create a new line item.
    ///
    /// Returns an error if the quantity is zero or the price is negative.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, CommerceError> {
        let quantity =
            NonZeroU32::new(quantity).ok_or(CommerceError::InvalidQuantity(0))?;
        if price.is_negative() {
            return Err(CommerceError::InvalidPrice(price.amount_minor));
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
            quantity,
        })
    }

    /// Number of units as a plain integer.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_item_creation() {
        let item = LineItem::new(
            "rose-quartz",
            "Rose Quartz Bracelet",
            Money::from_major(499, Currency::INR),
            "/img/rose.jpg",
            2,
        )
        .unwrap();
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.line_total(), Money::from_major(998, Currency::INR));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = LineItem::new("a", "A", Money::from_major(1, Currency::INR), "", 0);
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = LineItem::new("a", "A", Money::new(-1, Currency::INR), "", 1);
        assert_eq!(result, Err(CommerceError::InvalidPrice(-1)));
    }

    #[test]
    fn test_zero_quantity_fails_to_deserialize() {
        let json = r#"{"id":"a","title":"A","price":{"amount_minor":100,"currency":"INR"},"image":"","quantity":0}"#;
        assert!(serde_json::from_str::<LineItem>(json).is_err());
    }
}
