//! Session cart store and checkout hand-off for the storefront.
//!
//! This crate provides:
//!
//! - **Cart**: line items, the command set and its pure transition function,
//!   and the session-scoped [`CartProvider`] / [`CartHandle`] pair
//! - **Catalog**: products as served by the catalog API, remedy categories, stock
//! - **Listing**: per-product "Add to Cart" / stepper state with the stock ceiling
//! - **Drawer**: the cart drawer view and its row actions
//! - **Checkout**: delivery details, order summary, WhatsApp hand-off
//!
//! # Example
//!
//! ```
//! use storefront_cart::prelude::*;
//!
//! let provider = CartProvider::new(Currency::INR);
//! let listing = ProductListing::new(provider.handle(), Currency::INR);
//!
//! let product = Product::new("rose-quartz", "Rose Quartz", 499.0, 5);
//! listing.add(&product).unwrap();
//! listing.increase(&product).unwrap();
//!
//! let view = CartDrawer::new(provider.handle()).view().unwrap();
//! assert_eq!(view.total.display(), "\u{20b9}998");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod drawer;
pub mod listing;

pub use cart::{Cart, CartChange, CartCommand, CartHandle, CartProvider, CartStore, LineItem};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::*;
    pub use crate::catalog::*;
    pub use crate::checkout::*;
    pub use crate::config::StorefrontConfig;
    pub use crate::drawer::{CartDrawer, DrawerRow, DrawerView};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::listing::{ListingControl, ProductListing};
    pub use crate::money::{Currency, Money};
}
