//! Cart commands and the pure transition function.

use crate::cart::{Cart, LineItem};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A mutation of a cart.
///
/// Serialized internally tagged so command scripts read as
/// `{"action": "increase_qty", "id": "rose-quartz"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CartCommand {
    /// Insert a row, or merge its quantity into the row with the same id.
    AddItem { item: LineItem },
    /// Add one unit to a row.
    IncreaseQty { id: ProductId },
    /// Take one unit from a row, never below one.
    DecreaseQty { id: ProductId },
    /// Drop a row whatever its quantity.
    RemoveItem { id: ProductId },
}

impl CartCommand {
    pub fn add(item: LineItem) -> Self {
        CartCommand::AddItem { item }
    }

    pub fn increase(id: impl Into<ProductId>) -> Self {
        CartCommand::IncreaseQty { id: id.into() }
    }

    pub fn decrease(id: impl Into<ProductId>) -> Self {
        CartCommand::DecreaseQty { id: id.into() }
    }

    pub fn remove(id: impl Into<ProductId>) -> Self {
        CartCommand::RemoveItem { id: id.into() }
    }

    /// The product the command targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartCommand::AddItem { item } => &item.id,
            CartCommand::IncreaseQty { id }
            | CartCommand::DecreaseQty { id }
            | CartCommand::RemoveItem { id } => id,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartCommand::AddItem { .. } => "add_item",
            CartCommand::IncreaseQty { .. } => "increase_qty",
            CartCommand::DecreaseQty { .. } => "decrease_qty",
            CartCommand::RemoveItem { .. } => "remove_item",
        }
    }
}

/// What a command did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum CartChange {
    /// A new row was appended.
    Inserted,
    /// Quantity was merged into an existing row.
    Merged { quantity: u32 },
    /// A row's quantity was stepped.
    Adjusted { quantity: u32 },
    /// A row was dropped.
    Removed,
    /// Nothing changed: unknown id, quantity floor, or saturation.
    Unchanged,
}

impl CartChange {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, CartChange::Unchanged)
    }
}

/// Pure transition: the cart that results from applying `command` to `cart`.
pub fn transition(mut cart: Cart, command: CartCommand) -> Cart {
    cart.apply(command);
    cart
}

/// Fold a sequence of commands over a cart.
pub fn replay(cart: Cart, commands: impl IntoIterator<Item = CartCommand>) -> Cart {
    commands.into_iter().fold(cart, transition)
}
