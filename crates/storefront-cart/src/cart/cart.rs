//! Cart type and its transition rules.

use crate::cart::{CartChange, CartCommand, LineItem};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// An ordered, id-unique collection of line items.
///
/// Rows keep the order their ids were first added in. Totals are derived from
/// the rows on every read and never stored. Deserialized carts are rebuilt
/// row by row, so repeated ids merge and foreign-currency rows are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "CartRows")]
pub struct Cart {
    /// Currency every row is priced in.
    pub currency: Currency,
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Rows in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a row by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.get(id).map(LineItem::quantity).unwrap_or(0)
    }

    /// Check if the cart holds a product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Sum of unit price times quantity.
    pub fn total_price(&self) -> Money {
        let amount = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total().amount_minor));
        Money::new(amount, self.currency)
    }

    /// Apply one command in place.
    ///
    /// Commands naming an id the cart does not hold are no-ops.
    pub fn apply(&mut self, command: CartCommand) -> CartChange {
        match command {
            CartCommand::AddItem { item } => self.add(item),
            CartCommand::IncreaseQty { id } => self.step(&id, |q| q.saturating_add(1)),
            CartCommand::DecreaseQty { id } => self.step(&id, |q| (q - 1).max(1)),
            CartCommand::RemoveItem { id } => self.remove(&id),
        }
    }

    fn add(&mut self, item: LineItem) -> CartChange {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            // first write wins for title, price and image
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity.get());
                CartChange::Merged {
                    quantity: existing.quantity(),
                }
            }
            None => {
                self.items.push(item);
                CartChange::Inserted
            }
        }
    }

    fn step(&mut self, id: &ProductId, next: impl Fn(u32) -> u32) -> CartChange {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return CartChange::Unchanged;
        };
        let before = item.quantity();
        let after = next(before);
        if after == before {
            return CartChange::Unchanged;
        }
        // next() never yields zero
        if let Some(quantity) = std::num::NonZeroU32::new(after) {
            item.quantity = quantity;
        }
        CartChange::Adjusted { quantity: after }
    }

    fn remove(&mut self, id: &ProductId) -> CartChange {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() < len_before {
            CartChange::Removed
        } else {
            CartChange::Unchanged
        }
    }
}

/// Wire shape of a cart before its rows are re-applied.
#[derive(Deserialize)]
struct CartRows {
    currency: Currency,
    #[serde(default)]
    items: Vec<LineItem>,
}

impl TryFrom<CartRows> for Cart {
    type Error = CommerceError;

    fn try_from(rows: CartRows) -> Result<Self, Self::Error> {
        let mut cart = Cart::new(rows.currency);
        for item in rows.items {
            if item.price.currency != cart.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: cart.currency.code().to_string(),
                    got: item.price.currency.code().to_string(),
                });
            }
            cart.apply(CartCommand::add(item));
        }
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, price: i64, quantity: u32) -> LineItem {
        LineItem::new(
            id,
            format!("Product {id}"),
            Money::from_major(price, Currency::INR),
            format!("/img/{id}.jpg"),
            quantity,
        )
        .unwrap()
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero(Currency::INR));
    }

    #[test]
    fn test_add_same_item_merges_quantity() {
        let mut cart = Cart::new(Currency::INR);
        assert_eq!(cart.apply(CartCommand::add(item("a", 100, 1))), CartChange::Inserted);
        assert_eq!(
            cart.apply(CartCommand::add(item("a", 100, 2))),
            CartChange::Merged { quantity: 3 }
        );

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&"a".into()), 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Money::from_major(300, Currency::INR));
    }

    #[test]
    fn test_merge_keeps_first_display_fields() {
        let mut cart = Cart::new(Currency::INR);
        cart.apply(CartCommand::add(item("a", 100, 1)));

        let mut repriced = item("a", 250, 1);
        repriced.title = "Renamed".to_string();
        cart.apply(CartCommand::add(repriced));

        let row = cart.get(&"a".into()).unwrap();
        assert_eq!(row.title, "Product a");
        assert_eq!(row.price, Money::from_major(100, Currency::INR));
        assert_eq!(row.quantity(), 2);
    }

    #[test]
    fn test_decrease_floors_at_one() {
        let mut cart = Cart::new(Currency::INR);
        cart.apply(CartCommand::add(item("a", 100, 2)));

        assert_eq!(
            cart.apply(CartCommand::decrease("a")),
            CartChange::Adjusted { quantity: 1 }
        );
        assert_eq!(cart.apply(CartCommand::decrease("a")), CartChange::Unchanged);
        assert_eq!(cart.quantity_of(&"a".into()), 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_increase() {
        let mut cart = Cart::new(Currency::INR);
        cart.apply(CartCommand::add(item("a", 100, 1)));
        cart.apply(CartCommand::increase("a"));
        cart.apply(CartCommand::increase("a"));
        assert_eq!(cart.quantity_of(&"a".into()), 3);
    }

    #[test]
    fn test_increase_saturates() {
        let mut cart = Cart::new(Currency::INR);
        cart.apply(CartCommand::add(item("a", 1, u32::MAX)));
        assert_eq!(cart.apply(CartCommand::increase("a")), CartChange::Unchanged);
        assert_eq!(cart.quantity_of(&"a".into()), u32::MAX);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut cart = Cart::new(Currency::INR);
        assert_eq!(cart.apply(CartCommand::decrease("x")), CartChange::Unchanged);
        assert_eq!(cart.apply(CartCommand::increase("x")), CartChange::Unchanged);
        assert_eq!(cart.apply(CartCommand::remove("x")), CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new(Currency::INR);
        cart.apply(CartCommand::add(item("a", 100, 1)));
        cart.apply(CartCommand::add(item("b", 50, 1)));
        assert_eq!(cart.apply(CartCommand::remove("a")), CartChange::Removed);

        assert_eq!(ids(&cart), vec!["b"]);
        assert_eq!(cart.total_items(), 1);

        cart.apply(CartCommand::increase("a"));
        cart.apply(CartCommand::decrease("a"));
        assert!(!cart.contains(&"a".into()));
    }

    #[test]
    fn test_insertion_order_survives_quantity_changes() {
        let mut cart = Cart::new(Currency::INR);
        for id in ["c", "a", "b"] {
            cart.apply(CartCommand::add(item(id, 10, 1)));
        }
        cart.apply(CartCommand::increase("b"));
        cart.apply(CartCommand::add(item("c", 10, 4)));
        cart.apply(CartCommand::decrease("c"));

        assert_eq!(ids(&cart), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_deserialize_merges_repeated_ids() {
        let json = r#"{
            "currency": "INR",
            "items": [
                {"id": "a", "title": "First", "price": {"amount_minor": 10000, "currency": "INR"}, "image": "", "quantity": 1},
                {"id": "b", "title": "B", "price": {"amount_minor": 500, "currency": "INR"}, "image": "", "quantity": 1},
                {"id": "a", "title": "Second", "price": {"amount_minor": 20000, "currency": "INR"}, "image": "", "quantity": 2}
            ]
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(ids(&cart), vec!["a", "b"]);
        assert_eq!(cart.quantity_of(&"a".into()), 3);
        assert_eq!(cart.get(&"a".into()).unwrap().title, "First");
        assert_eq!(cart.total_price(), Money::new(30_500, Currency::INR));
    }

    #[test]
    fn test_deserialize_rejects_foreign_currency_rows() {
        let json = r#"{
            "currency": "INR",
            "items": [
                {"id": "a", "title": "A", "price": {"amount_minor": 500, "currency": "USD"}, "image": "", "quantity": 1}
            ]
        }"#;
        let err = serde_json::from_str::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("Currency mismatch"));
    }

    #[test]
    fn test_serialized_cart_reads_back() {
        let mut cart = Cart::new(Currency::INR);
        cart.apply(CartCommand::add(item("a", 100, 2)));
        cart.apply(CartCommand::add(item("b", 5, 1)));

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(serde_json::from_str::<Cart>(&json).unwrap(), cart);
    }
}
