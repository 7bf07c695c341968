//! Cart Page View
//!
//! Renders the cart contents and the order summary. Shipping is a fixed
//! "Free" label, so the order total equals the subtotal.

use crate::cart::helpers::format_usd;
use crate::cart::Cart;

/// The aggregates shown in the order summary box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    /// Sum of quantities across all line items
    pub item_count: u32,
    /// Sum of price times quantity
    pub subtotal: f64,
    /// Equals the subtotal; shipping is free
    pub total: f64,
}

impl OrderSummary {
    /// Derives the summary from the current cart state.
    pub fn of(cart: &Cart) -> Self {
        let subtotal = cart.total();
        Self {
            item_count: cart.item_count(),
            subtotal,
            total: subtotal,
        }
    }
}

/// The cart page, rendering a borrowed cart.
#[derive(Debug)]
pub struct CartView<'a> {
    cart: &'a Cart,
}

impl<'a> CartView<'a> {
    pub fn new(cart: &'a Cart) -> Self {
        Self { cart }
    }

    /// The order summary for the current contents.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::of(self.cart)
    }

    /// Renders the page: an explicit empty state, or the line items plus the
    /// order summary.
    pub fn render(&self) -> String {
        if self.cart.is_empty() {
            return "Your cart is empty\nAdd some products to get started\n".to_string();
        }

        let mut out = String::new();
        out.push_str("Shopping Cart\n\n");
        for item in self.cart.items() {
            out.push_str(&format!(
                "  [{:>3}] {}\n        {} x {} = {}\n",
                item.product.id,
                item.product.title,
                item.quantity,
                format_usd(item.product.price),
                format_usd(item.subtotal())
            ));
        }

        let summary = self.summary();
        out.push_str("\nOrder Summary\n");
        out.push_str(&format!(
            "  Subtotal ({} item{}): {}\n",
            summary.item_count,
            if summary.item_count == 1 { "" } else { "s" },
            format_usd(summary.subtotal)
        ));
        out.push_str("  Shipping: Free\n");
        out.push_str(&format!("  Total: {}\n", format_usd(summary.total)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Product;

    fn product(id: u32, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: "misc".into(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn empty_cart_renders_the_empty_state() {
        let cart = Cart::new();
        let rendered = CartView::new(&cart).render();
        assert!(rendered.contains("Your cart is empty"));
    }

    #[test]
    fn summary_totals_match_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, "Backpack", 10.0));
        cart.add(product(1, "Backpack", 10.0));
        cart.add(product(2, "Shirt", 22.5));

        let summary = OrderSummary::of(&cart);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, 42.5);
        assert_eq!(summary.total, summary.subtotal);
    }

    #[test]
    fn render_shows_line_subtotals_and_free_shipping() {
        let mut cart = Cart::new();
        cart.add(product(1, "Backpack", 10.0));
        cart.set_quantity(1, 2);

        let rendered = CartView::new(&cart).render();
        assert!(rendered.contains("2 x $10.00 = $20.00"));
        assert!(rendered.contains("Shipping: Free"));
        assert!(rendered.contains("Total: $20.00"));
    }
}
