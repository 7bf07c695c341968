//! Home Page View
//!
//! Shows the first few catalog products as a featured strip plus static
//! category tiles linking into the pre-filtered catalog.

use crate::api::models::Product;
use crate::api::{ApiResult, StoreApi};
use crate::cart::helpers::format_usd;
use crate::router::Route;

/// How many products the featured strip shows.
pub const FEATURED_COUNT: usize = 8;

/// Category tiles shown on the home page. The route values match the
/// category names the external API actually serves.
const CATEGORY_TILES: [(&str, &str); 4] = [
    ("Electronics", "electronics"),
    ("Jewelry", "jewelery"),
    ("Men's Clothing", "men's clothing"),
    ("Women's Clothing", "women's clothing"),
];

/// The home page: featured products and category shortcuts.
#[derive(Debug)]
pub struct HomeView {
    featured: Vec<Product>,
}

impl HomeView {
    /// Fetches the catalog and keeps the first [`FEATURED_COUNT`] products.
    pub async fn load(api: &StoreApi) -> ApiResult<Self> {
        let mut featured = api.list_products().await?;
        featured.truncate(FEATURED_COUNT);
        Ok(Self { featured })
    }

    /// The featured products, in server order.
    pub fn featured(&self) -> &[Product] {
        &self.featured
    }

    /// Renders the page to text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Welcome to ShopyKart\n");
        out.push_str("Discover amazing products at unbeatable prices\n\n");

        out.push_str("Featured products:\n");
        for product in &self.featured {
            out.push_str(&format!(
                "  [{:>3}] {:>10}  {}\n",
                product.id,
                format_usd(product.price),
                product.title
            ));
        }

        out.push_str("\nShop by category:\n");
        for (label, category) in CATEGORY_TILES {
            let route = Route::Products {
                search: None,
                category: Some(category.to_string()),
            };
            out.push_str(&format!("  {label:<18} open {route}\n"));
        }
        out
    }
}
