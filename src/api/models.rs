//! Product Wire Models
//!
//! Data structures matching the JSON shape served by the external catalog
//! API. Products are read-only to this crate: they are fetched fresh on each
//! view load and never mutated or persisted. Identity is the `id` field.

use serde::{Deserialize, Serialize};

/// A single catalog product as served by the external API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier
    pub id: u32,

    /// Display name
    pub title: String,

    /// Unit price in USD
    pub price: f64,

    /// Free-text description
    pub description: String,

    /// Category name; the set of categories is defined server-side
    pub category: String,

    /// URL of the product image
    pub image: String,

    /// Aggregate customer rating; not present on every product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Aggregate rating attached to a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average rating, 0 to 5
    pub rate: f64,

    /// Number of ratings the average is based on
    pub count: u32,
}

impl Product {
    /// Rating value used for sorting; a missing rating counts as 0.
    pub fn rating_rate(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }
}
