//! Product listing surface.
//!
//! A listing card shows an "Add to Cart" button until the product is in the
//! cart, then a quantity stepper. The stepper's "+" is capped at the
//! product's stock; that cap is listing policy and lives here, not in the
//! cart store.

use crate::cart::{CartChange, CartHandle};
use crate::catalog::{Product, StockLevel};
use crate::error::CommerceError;
use crate::money::Currency;
use serde::Serialize;
use tracing::debug;

/// The cart control a listing card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ListingControl {
    /// Not in the cart, stock available.
    AddToCart,
    /// Not in the cart, nothing in stock; the button is disabled.
    OutOfStock,
    /// In the cart.
    Stepper { quantity: u32, can_increase: bool },
}

impl ListingControl {
    /// Control for a product with `stock` units of which the cart holds `quantity`.
    pub fn for_state(stock: StockLevel, quantity: u32) -> Self {
        if quantity > 0 {
            ListingControl::Stepper {
                quantity,
                can_increase: quantity.checked_add(1).is_some_and(|next| stock.allows(next)),
            }
        } else if stock.in_stock() {
            ListingControl::AddToCart
        } else {
            ListingControl::OutOfStock
        }
    }

    /// Button label for the non-stepper states.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ListingControl::AddToCart => Some("Add to Cart"),
            ListingControl::OutOfStock => Some("Out of Stock"),
            ListingControl::Stepper { .. } => None,
        }
    }
}

/// Cart actions available to a product listing.
#[derive(Debug, Clone)]
pub struct ProductListing {
    cart: CartHandle,
    currency: Currency,
}

impl ProductListing {
    pub fn new(cart: CartHandle, currency: Currency) -> Self {
        Self { cart, currency }
    }

    /// Current control for a product card.
    pub fn control_for(&self, product: &Product) -> Result<ListingControl, CommerceError> {
        let quantity = self.cart.quantity_of(&product.id)?;
        Ok(ListingControl::for_state(product.stock_level(), quantity))
    }

    /// Add one unit of a product.
    pub fn add(&self, product: &Product) -> Result<CartChange, CommerceError> {
        if !product.stock_level().in_stock() {
            return Err(CommerceError::OutOfStock(product.id.to_string()));
        }
        let item = product.to_line_item(self.currency, 1)?;
        self.cart.add_to_cart(item)
    }

    /// Step a product's quantity up, refusing to pass its stock.
    pub fn increase(&self, product: &Product) -> Result<CartChange, CommerceError> {
        let quantity = self.cart.quantity_of(&product.id)?;
        let stock = product.stock_level();
        if quantity > 0 && !quantity.checked_add(1).is_some_and(|next| stock.allows(next)) {
            debug!(product_id = %product.id, quantity, stock = product.stock, "stock ceiling reached");
            return Err(CommerceError::StockCeilingReached {
                product_id: product.id.to_string(),
                stock: product.stock,
            });
        }
        self.cart.increase_qty(&product.id)
    }

    /// Step a product's quantity down; the store keeps it at one or more.
    pub fn decrease(&self, product: &Product) -> Result<CartChange, CommerceError> {
        self.cart.decrease_qty(&product.id)
    }
}
