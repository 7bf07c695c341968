//! Shopping Cart State Management
//!
//! The cart is session-scoped mutable state: it is constructed once by the
//! application root, passed by reference to the views that need it, and
//! dropped when the process ends. There is no persistence. All operations
//! are synchronous and total; no invalid state is reachable through the
//! public contract.

use super::models::LineItem;
use crate::api::models::Product;

/// The session shopping cart: an ordered sequence of line items.
///
/// Invariants held by construction:
/// - at most one line item per distinct product id
/// - every stored quantity is at least 1 (a quantity reaching 0 removes the
///   line entirely)
/// - iteration order is insertion order
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`: increments the existing line item if the
    /// id is already in the cart, otherwise appends a new line with
    /// quantity 1. Quantities are unbounded.
    pub fn add(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity += 1;
        } else {
            self.items.push(LineItem::new(product));
        }
    }

    /// Sets the quantity of the line item with `id`. A quantity of 0 removes
    /// the line entirely. No-op when `id` is not in the cart.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity;
        }
    }

    /// Removes the line item with `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|i| i.product.id != id);
    }

    /// Empties the cart. Used after a successful mock checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items; drives the navigation badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price times quantity across all line items; 0.0 when empty.
    /// Shipping is a fixed "Free" label elsewhere, never part of this total.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.subtotal()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price,
            description: String::new(),
            category: "misc".into(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn repeated_adds_aggregate_into_one_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0));
        cart.add(product(1, 10.0));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn distinct_products_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product(2, 5.0));
        cart.add(product(1, 3.0));
        cart.add(product(2, 5.0));

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0));
        cart.add(product(2, 4.0));

        cart.set_quantity(1, 0);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, 2);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn set_quantity_updates_in_place() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.5));

        cart.set_quantity(1, 4);

        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.total(), 10.0);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0));

        cart.set_quantity(99, 5);
        cart.remove(99);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0));
        cart.add(product(2, 20.0));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0));
        cart.add(product(2, 4.5));
        cart.set_quantity(2, 3);

        assert_eq!(cart.total(), 10.0 + 4.5 * 3.0);
        assert_eq!(cart.item_count(), 4);
    }
}
