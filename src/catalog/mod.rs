//! Catalog Filtering Module
//!
//! Client-side filter and sort pipeline over the fetched product list:
//! - Criteria: the current search/category/price/sort selections
//! - Pipeline: the pure derivation from (catalog, criteria) to a result list

pub mod criteria;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use criteria::{Criteria, SortKey};
pub use pipeline::apply;
