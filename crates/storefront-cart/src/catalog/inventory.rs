//! Stock levels as shown on listings.

use serde::{Deserialize, Serialize};

/// Units of a product available for sale.
///
/// Stock is advisory: listings cap their steppers with it, the cart store
/// itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StockLevel {
    /// Units in stock.
    pub quantity: u32,
}

impl StockLevel {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Check if a cart quantity fits in stock.
    pub fn allows(&self, quantity: u32) -> bool {
        quantity <= self.quantity
    }

    /// Listing label, e.g. "In Stock (4)".
    pub fn label(&self) -> String {
        if self.in_stock() {
            format!("In Stock ({})", self.quantity)
        } else {
            "Out of Stock".to_string()
        }
    }
}
