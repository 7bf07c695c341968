//! Filter & Sort Pipeline
//!
//! Pure derivation from (catalog, criteria) to the list the grid renders.
//! The three filters are conjunctive and order-independent; the sort runs
//! last, over the filtered set, and is stable so "default" and tied keys
//! preserve server order. Re-run on every input change rather than cached.

use super::criteria::{Criteria, SortKey};
use crate::api::models::Product;

/// Applies `criteria` to `catalog` and returns the matching products,
/// sorted. Borrows from the catalog; nothing is cloned.
pub fn apply<'a>(catalog: &'a [Product], criteria: &Criteria) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = catalog
        .iter()
        .filter(|p| matches_search(p, criteria.search.as_deref()))
        .filter(|p| matches_category(p, criteria.category.as_deref()))
        .filter(|p| matches_price(p, criteria.price_min, criteria.price_max))
        .collect();

    match criteria.sort {
        SortKey::Default => {}
        SortKey::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => {
            filtered.sort_by(|a, b| b.rating_rate().total_cmp(&a.rating_rate()))
        }
        SortKey::NameAsc => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    filtered
}

fn matches_search(product: &Product, term: Option<&str>) -> bool {
    match term {
        Some(term) if !term.is_empty() => {
            let needle = term.to_lowercase();
            product.title.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        }
        _ => true,
    }
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        Some(category) if !category.is_empty() => {
            product.category.eq_ignore_ascii_case(category)
        }
        _ => true,
    }
}

fn matches_price(product: &Product, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |min| product.price >= min) && max.map_or(true, |max| product.price <= max)
}
