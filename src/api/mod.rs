//! Product API Module
//!
//! Thin client for the external product catalog REST API:
//! - Wire models (Product, Rating)
//! - The HTTP client itself (list/get products, categories)
//! - Error taxonomy for failed fetches

pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{StoreApi, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use models::{Product, Rating};
