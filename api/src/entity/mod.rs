//! SeaORM entities
//!
//! Table definitions mapped by the ORM. Domain code works with the types in
//! `domain::entities` and converts at the adapter boundary.

pub mod products;
