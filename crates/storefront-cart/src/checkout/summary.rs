//! Order summary read from the cart at checkout.

use crate::cart::{Cart, LineItem};
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A line of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.id.clone(),
            title: item.title.clone(),
            quantity: item.quantity(),
            unit_price: item.price,
            line_total: item.line_total(),
        }
    }
}

/// The cart as checkout sees it: every line plus the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total_items: u64,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.items().iter().map(OrderLine::from).collect(),
            total_items: cart.total_items(),
            total: cart.total_price(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
