//! Checkout hand-off to WhatsApp.
//!
//! No payment is taken here. The order is rendered as a chat message and
//! opened against the merchant's number through a `wa.me` link.

use crate::cart::CartHandle;
use crate::checkout::{DeliveryDetails, OrderSummary};
use crate::config::CheckoutConfig;
use crate::error::CommerceError;
use serde::Serialize;
use tracing::{info, warn};

/// Base of click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// A composed order, ready to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutHandoff {
    /// Plain-text order message.
    pub message: String,
    /// Click-to-chat link carrying the message.
    pub url: String,
}

/// Composes order messages for one merchant number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppCheckout {
    number: String,
}

impl WhatsAppCheckout {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self::new(config.whatsapp_number.clone())
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Render the order message.
    pub fn message(summary: &OrderSummary, details: &DeliveryDetails) -> String {
        let lines = summary
            .lines
            .iter()
            .map(|line| {
                format!(
                    "\u{2022} {} \u{00d7} {} = {}",
                    line.title, line.quantity, line.line_total
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\u{1f6d2} *New Order*\n\n{lines}\n\n\u{1f4b0} Total: {total}\n\n\u{1f4e6} Delivery Details:\nName: {name}\nPhone: {phone}\nAddress: {address}",
            lines = lines,
            total = summary.total,
            name = details.name,
            phone = details.phone,
            address = details.one_line_address(),
        )
    }

    /// Click-to-chat link for a message.
    pub fn link(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            self.number,
            urlencoding::encode(message)
        )
    }

    /// Compose the hand-off for a summary.
    ///
    /// Fails when the cart is empty or any delivery field is blank.
    pub fn compose(
        &self,
        summary: &OrderSummary,
        details: &DeliveryDetails,
    ) -> Result<CheckoutHandoff, CommerceError> {
        if summary.is_empty() {
            return Err(CommerceError::CheckoutIncomplete("cart".to_string()));
        }
        let missing = details.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "checkout refused: delivery details incomplete");
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        let message = Self::message(summary, details);
        let url = self.link(&message);
        info!(
            lines = summary.lines.len(),
            total_items = summary.total_items,
            total = %summary.total,
            "checkout hand-off composed"
        );
        Ok(CheckoutHandoff { message, url })
    }
}

/// The checkout page, bound to the session cart.
#[derive(Debug, Clone)]
pub struct Checkout {
    cart: CartHandle,
    whatsapp: WhatsAppCheckout,
}

impl Checkout {
    pub fn new(cart: CartHandle, whatsapp: WhatsAppCheckout) -> Self {
        Self { cart, whatsapp }
    }

    /// Summary of the cart as it is now.
    pub fn summary(&self) -> Result<OrderSummary, CommerceError> {
        self.cart.read(|store| OrderSummary::from_cart(store.cart()))
    }

    /// Compose the WhatsApp order for the current cart.
    ///
    /// The cart is left untouched; the order is only handed off.
    pub fn place_order(&self, details: &DeliveryDetails) -> Result<CheckoutHandoff, CommerceError> {
        let summary = self.summary()?;
        self.whatsapp.compose(&summary, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartProvider, LineItem};
    use crate::money::{Currency, Money};
    use pretty_assertions::assert_eq;

    fn details() -> DeliveryDetails {
        DeliveryDetails::new("Asha", "9876543210", "12 MG Road", "Pune", "411001")
    }

    fn provider_with_items() -> CartProvider {
        let provider = CartProvider::new(Currency::INR);
        let handle = provider.handle();
        let rose = LineItem::new("rose", "Rose Quartz", Money::from_major(499, Currency::INR), "", 2).unwrap();
        let pyrite = LineItem::new("pyrite", "Pyrite", Money::from_major(250, Currency::INR), "", 1).unwrap();
        handle.add_to_cart(rose).unwrap();
        handle.add_to_cart(pyrite).unwrap();
        provider
    }

    #[test]
    fn test_message_format() {
        let provider = provider_with_items();
        let summary = OrderSummary::from_cart(&provider.snapshot().unwrap());

        let expected = "\u{1f6d2} *New Order*\n\n\
\u{2022} Rose Quartz \u{00d7} 2 = \u{20b9}998\n\
\u{2022} Pyrite \u{00d7} 1 = \u{20b9}250\n\n\
\u{1f4b0} Total: \u{20b9}1248\n\n\
\u{1f4e6} Delivery Details:\n\
Name: Asha\n\
Phone: 9876543210\n\
Address: 12 MG Road, Pune, 411001";
        assert_eq!(WhatsAppCheckout::message(&summary, &details()), expected);
    }

    #[test]
    fn test_message_fractional_prices() {
        let provider = CartProvider::new(Currency::INR);
        let mala = LineItem::new("mala", "Rudraksha Mala", Money::new(4950, Currency::INR), "", 3).unwrap();
        provider.handle().add_to_cart(mala).unwrap();
        let summary = OrderSummary::from_cart(&provider.snapshot().unwrap());

        let message = WhatsAppCheckout::message(&summary, &details());
        assert!(message.contains("\u{2022} Rudraksha Mala \u{00d7} 3 = \u{20b9}148.5\n"));
        assert!(message.contains("\u{1f4b0} Total: \u{20b9}148.5\n"));
    }

    #[test]
    fn test_link_is_percent_encoded() {
        let whatsapp = WhatsAppCheckout::new("919876543210");
        assert_eq!(
            whatsapp.link("Hi there\nTotal: 5"),
            "https://wa.me/919876543210?text=Hi%20there%0ATotal%3A%205"
        );
    }

    #[test]
    fn test_place_order() {
        let provider = provider_with_items();
        let checkout = Checkout::new(provider.handle(), WhatsAppCheckout::new("919876543210"));

        let handoff = checkout.place_order(&details()).unwrap();
        assert!(handoff.url.starts_with("https://wa.me/919876543210?text="));
        assert!(handoff.message.contains("Total: \u{20b9}1248"));
        // hand-off does not clear the cart
        assert_eq!(provider.snapshot().unwrap().total_items(), 3);
    }

    #[test]
    fn test_incomplete_details_refused() {
        let provider = provider_with_items();
        let checkout = Checkout::new(provider.handle(), WhatsAppCheckout::new("1"));
        let mut details = details();
        details.pincode.clear();

        assert_eq!(
            checkout.place_order(&details),
            Err(CommerceError::CheckoutIncomplete("pincode".to_string()))
        );
    }

    #[test]
    fn test_empty_cart_refused() {
        let provider = CartProvider::new(Currency::INR);
        let checkout = Checkout::new(provider.handle(), WhatsAppCheckout::new("1"));
        assert_eq!(
            checkout.place_order(&details()),
            Err(CommerceError::CheckoutIncomplete("cart".to_string()))
        );
    }

    #[test]
    fn test_checkout_after_session_end() {
        let provider = provider_with_items();
        let checkout = Checkout::new(provider.handle(), WhatsAppCheckout::new("1"));
        drop(provider);
        assert_eq!(checkout.summary(), Err(CommerceError::CartUnavailable));
    }
}
