//! ShopyKart Storefront Library
//!
//! This library provides the core functionality for a headless storefront
//! client: a thin client for a hosted product catalog API, a session-scoped
//! shopping cart, a client-side filter/sort pipeline, and the view layer
//! that ties them together.

// Domain modules
pub mod api;
pub mod cart;
pub mod catalog;
pub mod views;

// Infrastructure
pub mod router;
pub mod shell;
