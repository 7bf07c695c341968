//! Product Detail Page View
//!
//! One product plus a local quantity selector. The selector starts at 1,
//! never drops below 1, and resets to 1 after adding to the cart.

use crate::api::models::Product;
use crate::api::{ApiResult, StoreApi};
use crate::cart::helpers::format_usd;
use crate::cart::Cart;
use crate::router::Route;

/// The product detail page.
#[derive(Debug)]
pub struct DetailView {
    product: Product,
    quantity: u32,
}

impl DetailView {
    /// Fetches the product with `id`.
    pub async fn load(api: &StoreApi, id: u32) -> ApiResult<Self> {
        let product = api.get_product(id).await?;
        Ok(Self {
            product,
            quantity: 1,
        })
    }

    /// The product being shown.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The currently selected quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Bumps the selected quantity. Unbounded.
    pub fn increment(&mut self) {
        self.quantity += 1;
    }

    /// Lowers the selected quantity, floored at 1.
    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Adds the selected quantity to the cart as repeated single-unit adds,
    /// then resets the selector to 1. Returns how many units were added.
    pub fn add_to_cart(&mut self, cart: &mut Cart) -> u32 {
        let added = self.quantity;
        for _ in 0..added {
            cart.add(self.product.clone());
        }
        self.quantity = 1;
        added
    }

    /// "Buy Now": same addition as [`Self::add_to_cart`], then navigates
    /// straight to the cart.
    pub fn buy_now(&mut self, cart: &mut Cart) -> Route {
        self.add_to_cart(cart);
        Route::Cart
    }

    /// Renders the page to text.
    pub fn render(&self) -> String {
        let product = &self.product;
        let mut out = String::new();
        out.push_str(&format!("[{}]\n", product.category));
        out.push_str(&format!("{}\n", product.title));
        out.push_str(&format!("{}\n", stars_line(product)));
        out.push_str(&format!("{}\n\n", format_usd(product.price)));
        out.push_str("Description\n");
        out.push_str(&format!("{}\n\n", product.description));
        out.push_str(&format!("Quantity: {}\n", self.quantity));
        out
    }
}

fn stars_line(product: &Product) -> String {
    match product.rating {
        Some(rating) => {
            let filled = (rating.rate.floor().max(0.0) as usize).min(5);
            let stars: String = "★".repeat(filled) + &"☆".repeat(5 - filled);
            format!("{stars} {} ({} reviews)", rating.rate, rating.count)
        }
        None => "Not yet rated".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Rating;

    fn view(price: f64) -> DetailView {
        DetailView {
            product: Product {
                id: 1,
                title: "Backpack".into(),
                price,
                description: "Fits 15 inch laptops".into(),
                category: "men's clothing".into(),
                image: String::new(),
                rating: Some(Rating {
                    rate: 3.9,
                    count: 120,
                }),
            },
            quantity: 1,
        }
    }

    #[test]
    fn decrement_is_floored_at_one() {
        let mut view = view(10.0);
        view.decrement();
        assert_eq!(view.quantity(), 1);

        view.increment();
        view.increment();
        assert_eq!(view.quantity(), 3);
        view.decrement();
        assert_eq!(view.quantity(), 2);
    }

    #[test]
    fn add_to_cart_adds_selected_quantity_and_resets() {
        let mut view = view(10.0);
        let mut cart = Cart::new();
        view.increment();
        view.increment();

        let added = view.add_to_cart(&mut cart);

        assert_eq!(added, 3);
        assert_eq!(view.quantity(), 1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 30.0);
    }

    #[test]
    fn buy_now_navigates_to_the_cart() {
        let mut view = view(10.0);
        let mut cart = Cart::new();

        let next = view.buy_now(&mut cart);

        assert_eq!(next, Route::Cart);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(view.quantity(), 1);
    }

    #[test]
    fn render_shows_rating_and_price() {
        let rendered = view(109.95).render();
        assert!(rendered.contains("★★★☆☆ 3.9 (120 reviews)"));
        assert!(rendered.contains("$109.95"));
        assert!(rendered.contains("Quantity: 1"));
    }
}
