//! Cart drawer surface.

use crate::cart::{Cart, CartChange, CartHandle, LineItem};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&LineItem> for DrawerRow {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image: item.image.clone(),
            unit_price: item.price,
            quantity: item.quantity(),
            line_total: item.line_total(),
        }
    }
}

/// Everything the drawer shows.
///
/// Shipping is always free, so `total` equals `subtotal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerView {
    pub rows: Vec<DrawerRow>,
    /// Distinct products, shown on the header badge.
    pub badge: usize,
    /// Units across all rows, shown on the navbar icon.
    pub total_items: u64,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl DrawerView {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        Self {
            rows: cart.items().iter().map(DrawerRow::from).collect(),
            badge: cart.len(),
            total_items: cart.total_items(),
            subtotal,
            shipping: Money::zero(cart.currency),
            total: subtotal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "FREE".to_string()
        } else {
            self.shipping.display()
        }
    }
}

/// The cart drawer, bound to the session cart.
#[derive(Debug, Clone)]
pub struct CartDrawer {
    cart: CartHandle,
}

impl CartDrawer {
    pub fn new(cart: CartHandle) -> Self {
        Self { cart }
    }

    pub fn view(&self) -> Result<DrawerView, CommerceError> {
        self.cart.read(|store| DrawerView::from_cart(store.cart()))
    }

    pub fn increase(&self, id: &ProductId) -> Result<CartChange, CommerceError> {
        self.cart.increase_qty(id)
    }

    pub fn decrease(&self, id: &ProductId) -> Result<CartChange, CommerceError> {
        self.cart.decrease_qty(id)
    }

    pub fn remove(&self, id: &ProductId) -> Result<CartChange, CommerceError> {
        self.cart.remove_item(id)
    }
}
