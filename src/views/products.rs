//! Catalog Page View
//!
//! Fetches the full product list and the category list concurrently, then
//! filters and sorts client-side. The filtered list is a pure derivation of
//! (catalog, criteria) and is recomputed on every render rather than cached,
//! so criteria changes can never leave a stale grid behind.

use crate::api::models::Product;
use crate::api::{ApiResult, StoreApi};
use crate::cart::helpers::format_usd;
use crate::catalog::{self, Criteria, SortKey};

/// The catalog page: the fetched product list plus the active criteria.
#[derive(Debug)]
pub struct CatalogView {
    catalog: Vec<Product>,
    categories: Vec<String>,
    criteria: Criteria,
}

impl CatalogView {
    /// Fetches products and categories concurrently, seeding the view with
    /// criteria taken from the route's query parameters.
    pub async fn load(api: &StoreApi, criteria: Criteria) -> ApiResult<Self> {
        let (catalog, categories) = tokio::try_join!(api.list_products(), api.list_categories())?;
        Ok(Self {
            catalog,
            categories,
            criteria,
        })
    }

    /// The unfiltered catalog in server order.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The category names offered by the sidebar.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The active criteria.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: Option<String>) {
        self.criteria.search = search;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
    }

    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.criteria.price_min = min;
        self.criteria.price_max = max;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
    }

    /// Clears every filter and restores the default sort.
    pub fn reset_filters(&mut self) {
        self.criteria = Criteria::default();
    }

    /// The products the grid shows, derived from the catalog and the active
    /// criteria.
    pub fn filtered(&self) -> Vec<&Product> {
        catalog::apply(&self.catalog, &self.criteria)
    }

    /// Renders the result count, the active filters, and the grid (or the
    /// explicit empty state).
    pub fn render(&self) -> String {
        let filtered = self.filtered();

        let mut out = String::new();
        out.push_str("Products\n");
        out.push_str(&format!(
            "{} product{} found\n",
            filtered.len(),
            if filtered.len() == 1 { "" } else { "s" }
        ));

        if !self.criteria.is_default() {
            out.push_str("\nActive filters:\n");
            if let Some(search) = &self.criteria.search {
                out.push_str(&format!("  search: {search}\n"));
            }
            if let Some(category) = &self.criteria.category {
                out.push_str(&format!("  category: {category}\n"));
            }
            if let Some(min) = self.criteria.price_min {
                out.push_str(&format!("  min price: {}\n", format_usd(min)));
            }
            if let Some(max) = self.criteria.price_max {
                out.push_str(&format!("  max price: {}\n", format_usd(max)));
            }
            if self.criteria.sort != SortKey::Default {
                out.push_str(&format!("  sort: {}\n", self.criteria.sort.label()));
            }
        }

        if !self.categories.is_empty() {
            out.push_str(&format!("\nCategories: {}\n", self.categories.join(", ")));
        }

        if filtered.is_empty() {
            out.push_str("\nNo products found matching your criteria.\n");
        } else {
            out.push('\n');
            for product in filtered {
                out.push_str(&format!(
                    "  [{:>3}] {:>10}  {}  ({})\n",
                    product.id,
                    format_usd(product.price),
                    product.title,
                    product.category
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: None,
        }
    }

    fn view() -> CatalogView {
        CatalogView {
            catalog: vec![
                product(1, "Backpack", 109.95, "a"),
                product(2, "Shirt", 22.3, "a"),
                product(3, "Gold Ring", 168.0, "b"),
            ],
            categories: vec!["a".into(), "b".into()],
            criteria: Criteria::default(),
        }
    }

    #[test]
    fn criteria_changes_rederive_the_grid() {
        let mut view = view();
        assert_eq!(view.filtered().len(), 3);

        view.set_category(Some("a".into()));
        assert_eq!(view.filtered().len(), 2);

        view.reset_filters();
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn empty_result_renders_the_no_products_state() {
        let mut view = view();
        view.set_search(Some("zeppelin".into()));

        let rendered = view.render();
        assert!(rendered.contains("0 products found"));
        assert!(rendered.contains("No products found matching your criteria."));
    }

    #[test]
    fn render_lists_the_filtered_grid() {
        let mut view = view();
        view.set_price_range(Some(100.0), None);
        view.set_sort(SortKey::PriceDesc);

        let rendered = view.render();
        assert!(rendered.contains("2 products found"));
        assert!(rendered.contains("Gold Ring"));
        assert!(rendered.contains("Backpack"));
        assert!(!rendered.contains("Shirt"));
        assert!(rendered.contains("sort: Price: High to Low"));
    }
}
