//! Shopping Cart Domain Models

use serde::{Deserialize, Serialize};

use crate::api::models::Product;

/// Returns the default quantity (1) for line items
fn default_quantity() -> u32 {
    1
}

/// One product's aggregated quantity within the cart.
///
/// The cart holds at most one line item per product id; adding the same
/// product again bumps the quantity instead of inserting a second line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product this line aggregates
    #[serde(flatten)]
    pub product: Product,

    /// Units of the product in the cart; always at least 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item with a single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
