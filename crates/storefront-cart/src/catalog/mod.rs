//! Product catalog module.
//!
//! Contains product types as the catalog API serves them, the remedies
//! categories, and stock levels.

mod category;
mod inventory;
mod product;

pub use category::RemedyCategory;
pub use inventory::StockLevel;
pub use product::{filter_by_category, Product, ProductStatus, PLACEHOLDER_IMAGE};
