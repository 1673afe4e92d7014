//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs
//! against PostgreSQL in production and in-memory SQLite in tests.

pub mod connection;
pub mod product_store;

pub use connection::{connect, ensure_schema};
pub use product_store::SqlProductStore;
