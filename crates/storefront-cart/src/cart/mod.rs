//! Shopping cart module.
//!
//! Contains the line item and cart types, the command set with its pure
//! transition function, and the session-scoped store that views share.

#[allow(clippy::module_inception)]
mod cart;
mod command;
mod line_item;
mod store;

pub use cart::Cart;
pub use command::{replay, transition, CartChange, CartCommand};
pub use line_item::LineItem;
pub use store::{CartHandle, CartProvider, CartStore};
