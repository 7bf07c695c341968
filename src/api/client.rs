//! Product API Client
//!
//! Each operation is a fresh HTTP GET against the configured base URL: no
//! caching, no retries, no timeout overrides. The base URL is fixed for the
//! lifetime of the client; tests point it at a local stub server.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::models::Product;

/// Base URL of the public product API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Client for the external product catalog API.
#[derive(Debug, Clone)]
pub struct StoreApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for StoreApi {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreApi {
    /// Creates a client pointed at the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client pointed at an alternate host (e.g. a test stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client fetches from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists all products in server-defined order.
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.get_json("/products").await
    }

    /// Fetches a single product. An unknown `id` surfaces as a status or
    /// decode error; the client does not validate existence separately.
    pub async fn get_product(&self, id: u32) -> ApiResult<Product> {
        self.get_json(&format!("/products/{id}")).await
    }

    /// Lists the category names in source order.
    pub async fn list_categories(&self) -> ApiResult<Vec<String>> {
        self.get_json("/products/categories").await
    }

    /// Lists the products of one category, filtered server-side. The catalog
    /// view filters client-side instead, but the endpoint is part of the API
    /// surface and kept for completeness.
    pub async fn list_products_by_category(&self, category: &str) -> ApiResult<Vec<Product>> {
        self.get_json(&format!(
            "/products/category/{}",
            urlencoding::encode(category)
        ))
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        // Fetch the body as text first so a malformed payload is reported as
        // a decode error rather than a transport error.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
