//! Client-Side Routes
//!
//! The route targets the storefront understands, parsed from `path?query`
//! strings. The shell is the view dispatcher: it resolves a route to a view,
//! drives the fetch, and prints the render.

use std::fmt;

use thiserror::Error;

/// A navigable location within the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - home page with the featured products strip
    Home,
    /// `/products` - the catalog, optionally pre-filtered via query params
    Products {
        search: Option<String>,
        category: Option<String>,
    },
    /// `/products/{id}` - a single product's detail page
    ProductDetail(u32),
    /// `/cart` - the cart contents and order summary
    Cart,
    /// `/checkout` - runs the mock checkout over the current cart
    Checkout,
    /// `/order-success` - the post-checkout confirmation page
    OrderSuccess,
}

/// The target string did not match any known route.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no route matches {0:?}")]
pub struct UnknownRoute(pub String);

impl Route {
    /// Parses a route from a target like `/products?search=shirt`. Query
    /// values are percent-decoded; unknown query parameters are ignored.
    pub fn parse(target: &str) -> Result<Route, UnknownRoute> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        // Tolerate a trailing slash on non-root paths.
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "" | "/" => Ok(Route::Home),
            "/cart" => Ok(Route::Cart),
            "/checkout" => Ok(Route::Checkout),
            "/order-success" => Ok(Route::OrderSuccess),
            "/products" => {
                let mut search = None;
                let mut category = None;
                for (key, value) in parse_query(query) {
                    match key.as_str() {
                        "search" => search = Some(value),
                        "category" => category = Some(value),
                        _ => {}
                    }
                }
                Ok(Route::Products { search, category })
            }
            _ => {
                if let Some(rest) = path.strip_prefix("/products/") {
                    if let Ok(id) = rest.parse::<u32>() {
                        return Ok(Route::ProductDetail(id));
                    }
                }
                Err(UnknownRoute(target.to_string()))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Products { search, category } => {
                write!(f, "/products")?;
                let mut params = Vec::new();
                if let Some(search) = search {
                    params.push(format!("search={}", urlencoding::encode(search)));
                }
                if let Some(category) = category {
                    params.push(format!("category={}", urlencoding::encode(category)));
                }
                if !params.is_empty() {
                    write!(f, "?{}", params.join("&"))?;
                }
                Ok(())
            }
            Route::ProductDetail(id) => write!(f, "/products/{id}"),
            Route::Cart => write!(f, "/cart"),
            Route::Checkout => write!(f, "/checkout"),
            Route::OrderSuccess => write!(f, "/order-success"),
        }
    }
}

/// Splits a query string into decoded key/value pairs. A key without `=`
/// maps to an empty value. `+` is treated as a space, matching how the
/// navigation search box encodes terms.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(raw)
}
