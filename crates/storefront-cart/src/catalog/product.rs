//! Product types as served by the catalog API.

use crate::cart::LineItem;
use crate::catalog::{RemedyCategory, StockLevel};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Image used when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is hidden from listings.
    Inactive,
    /// Product is in draft mode, not visible to customers.
    Draft,
}

/// A product in the catalog.
///
/// Prices arrive in major units (rupees) as plain JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Current unit price in major units.
    pub price: f64,
    /// Struck-through price, when discounted.
    #[serde(default)]
    pub old_price: Option<f64>,
    /// Image URLs; the first is the listing image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Units available.
    #[serde(default)]
    pub stock: u32,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// Visibility status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Promotional badge text.
    #[serde(default)]
    pub badge: Option<String>,
    /// Average review rating.
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    /// Create an active product with no images.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            old_price: None,
            images: Vec::new(),
            stock,
            category: String::new(),
            status: ProductStatus::Active,
            badge: None,
            rating: 0.0,
        }
    }

    /// Set the category slug.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Append an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Unit price in the given currency.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }

    /// Listing image, falling back to the placeholder.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::new(self.stock)
    }

    /// Whether the product is discounted against its old price.
    pub fn is_discounted(&self) -> bool {
        self.old_price.map(|old| old > self.price).unwrap_or(false)
    }

    /// Remedy category, when the product belongs to the remedies line.
    pub fn remedy_category(&self) -> Option<RemedyCategory> {
        RemedyCategory::from_slug(&self.category)
    }

    pub fn is_remedy(&self) -> bool {
        self.remedy_category().is_some()
    }

    /// Snapshot this product as a cart line item.
    pub fn to_line_item(&self, currency: Currency, quantity: u32) -> Result<LineItem, CommerceError> {
        LineItem::new(
            self.id.clone(),
            self.title.clone(),
            self.unit_price(currency),
            self.primary_image(),
            quantity,
        )
    }
}

/// Products of one remedy category, in the order given.
///
/// Slugs compare case-insensitively; an unknown slug is an error.
pub fn filter_by_category<'a>(
    products: &'a [Product],
    slug: &str,
) -> Result<Vec<&'a Product>, CommerceError> {
    let category = RemedyCategory::from_slug(slug)
        .ok_or_else(|| CommerceError::InvalidCategory(slug.to_string()))?;
    Ok(products
        .iter()
        .filter(|p| p.remedy_category() == Some(category))
        .collect())
}
