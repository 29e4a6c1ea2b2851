//! Checkout module.
//!
//! Contains delivery details, the order summary read from the cart, and the
//! WhatsApp hand-off.

mod delivery;
mod summary;
mod whatsapp;

pub use delivery::DeliveryDetails;
pub use summary::{OrderLine, OrderSummary};
pub use whatsapp::{Checkout, CheckoutHandoff, WhatsAppCheckout, WHATSAPP_BASE_URL};
