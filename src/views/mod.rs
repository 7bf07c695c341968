//! View Controllers
//!
//! The storefront pages as plain state holders: each view fetches its data on
//! `load`, keeps it in view-local state, and renders to a `String` for the
//! shell to print. Cart mutations go through the `Cart` passed in by the
//! application root; views never own the cart.

pub mod cart;
pub mod detail;
pub mod home;
pub mod order;
pub mod products;

// Re-export commonly used types for convenience
pub use cart::{CartView, OrderSummary};
pub use detail::DetailView;
pub use home::HomeView;
pub use order::OrderConfirmation;
pub use products::CatalogView;

use crate::api::ApiError;

/// Localized failure affordance shared by the fetching views: log the error,
/// hand the caller a retry message scoped to what failed to load. A failed
/// fetch never takes down the whole session.
pub(crate) fn render_fetch_error(what: &str, err: &ApiError) -> String {
    tracing::error!(error = %err, "failed to load {what}");
    format!("Failed to load {what}. Please try again.\n")
}
