//! Storefront configuration.
//!
//! Deserializes from TOML or JSON; every section has defaults so a missing
//! file or a partial one still yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Currency;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Store identity and pricing.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout hand-off.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Cart currency, parsed from `store.currency`.
    pub fn currency(&self) -> Result<Currency, CommerceError> {
        Currency::from_code(&self.store.currency).ok_or_else(|| {
            CommerceError::ConfigError(format!("unknown currency '{}'", self.store.currency))
        })
    }

    /// Collect every problem with the configuration.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.store.name.trim().is_empty() {
            errors.push("store.name is required".to_string());
        }
        if Currency::from_code(&self.store.currency).is_none() {
            errors.push(format!("store.currency '{}' is not supported", self.store.currency));
        }

        let number = &self.checkout.whatsapp_number;
        if !number.chars().all(|c| c.is_ascii_digit()) {
            errors.push("checkout.whatsapp_number must contain digits only".to_string());
        } else if !(8..=15).contains(&number.len()) {
            errors.push("checkout.whatsapp_number must be 8 to 15 digits".to_string());
        }

        errors
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code for cart prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    "Aryamadam".to_string()
}

fn default_currency() -> String {
    Currency::INR.code().to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
        }
    }
}

/// Checkout hand-off settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Merchant number in international format, digits only.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
}

fn default_whatsapp_number() -> String {
    "919876543210".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Default `storefront.toml` contents.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[store]
name = "{name}"
currency = "INR"

[checkout]
# Merchant WhatsApp number, country code first, digits only
whatsapp_number = "919876543210"

[logging]
level = "info"
json = false
"#,
        name = name
    )
}
