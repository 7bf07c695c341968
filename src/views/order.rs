//! Order Confirmation View
//!
//! The mock checkout: no payment is processed. Placing an order logs a
//! summary of the purchased items, empties the cart, and produces a
//! confirmation with a generated order number.

use tracing::info;
use uuid::Uuid;

use crate::cart::helpers::format_item_summary;
use crate::cart::Cart;

/// The post-checkout confirmation page.
#[derive(Debug)]
pub struct OrderConfirmation {
    order_number: String,
}

impl OrderConfirmation {
    /// Runs the mock checkout over `cart`: logs the order, clears the cart,
    /// and returns the confirmation. The caller is expected to check for an
    /// empty cart first.
    pub fn place_order(cart: &mut Cart) -> Self {
        let summary = format_item_summary(cart.items());
        let order_number = generate_order_number();
        info!(order_total = cart.total(), %order_number, "checkout: {summary}");
        cart.clear();

        Self { order_number }
    }

    /// The generated order number, e.g. `SK-5f2b1c9a`.
    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    /// Renders the confirmation page to text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Order placed successfully!\n");
        out.push_str("Thank you for your purchase. Your order has been received and is being processed.\n\n");
        out.push_str(&format!("Order #{}\n", self.order_number));
        out.push_str("You will receive an email confirmation shortly with tracking details.\n");
        out
    }
}

fn generate_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("SK-{}", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Product;

    #[test]
    fn placing_an_order_clears_the_cart() {
        let mut cart = Cart::new();
        cart.add(Product {
            id: 1,
            title: "Backpack".into(),
            price: 10.0,
            description: String::new(),
            category: "misc".into(),
            image: String::new(),
            rating: None,
        });

        let confirmation = OrderConfirmation::place_order(&mut cart);

        assert!(cart.is_empty());
        assert!(confirmation.order_number().starts_with("SK-"));
        assert_eq!(confirmation.order_number().len(), "SK-".len() + 8);
        assert!(confirmation.render().contains(confirmation.order_number()));
    }

    #[test]
    fn order_numbers_are_unique_per_order() {
        let mut cart = Cart::new();
        let first = OrderConfirmation::place_order(&mut cart);
        let second = OrderConfirmation::place_order(&mut cart);
        assert_ne!(first.order_number(), second.order_number());
    }
}
