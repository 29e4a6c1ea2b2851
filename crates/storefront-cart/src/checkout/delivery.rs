//! Delivery details collected at checkout.

use serde::{Deserialize, Serialize};

/// Where and to whom an order is delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeliveryDetails {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub pincode: String,
}

impl DeliveryDetails {
    /// Create delivery details.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            street: street.into(),
            city: city.into(),
            pincode: pincode.into(),
        }
    }

    /// Names of the fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("street", &self.street),
            ("city", &self.city),
            ("pincode", &self.pincode),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Format the address as a single line.
    pub fn one_line_address(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.pincode)
    }
}
