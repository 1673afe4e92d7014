//! Application layer
//!
//! Contains use cases and service orchestration.
//! Controllers coordinate between domain entities and ports through a
//! per-operation persistence context.

pub mod action_result;
pub mod product_context;
pub mod products_controller;

pub use action_result::ActionResult;
pub use product_context::ProductContext;
pub use products_controller::{ProductsController, PRODUCTS_ROUTE};
