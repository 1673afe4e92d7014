//! Product domain entity
//!
//! The single resource managed by the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Request payload for creating or replacing a product.
///
/// The id is optional on create, where a fresh one is generated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
}

impl ProductInput {
    /// Build the stored record, keeping the caller's id or generating one.
    ///
    /// The nil UUID counts as unset.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id.filter(|id| !id.0.is_nil()).unwrap_or_default(),
            name: self.name,
            price: self.price,
        }
    }
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            price: product.price,
        }
    }
}
