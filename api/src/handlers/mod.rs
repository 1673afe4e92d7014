//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod products;
pub mod response;

pub use products::{create_product, delete_product, get_product, list_products, update_product};
