//! Catalog products and the basket line items built from them.
//!
//! Products come from the menu, which lives outside this crate. The store trusts their
//! `name` and `price` as given.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for menu products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A sellable menu item as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One product-id-keyed entry in a basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Always at least 1 while the item is in a basket.
    pub quantity: u32,
}

impl LineItem {
    pub(crate) fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
