//! Shopping Cart Domain Module
//!
//! This module contains the shopping cart business logic, including:
//! - The line item model
//! - The session-scoped cart state and its operations
//! - Formatting helpers (prices, order line summaries)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::LineItem;
pub use state::Cart;
