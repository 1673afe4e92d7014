//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over PostgreSQL or SQLite).

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductId};
use crate::error::DomainError;

/// A single staged mutation waiting for commit
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Add(Product),
    Update(Product),
    Remove(ProductId),
}

impl PendingChange {
    /// Id of the product this change touches
    pub fn product_id(&self) -> ProductId {
        match self {
            PendingChange::Add(p) | PendingChange::Update(p) => p.id,
            PendingChange::Remove(id) => *id,
        }
    }
}

/// Ordered set of staged mutations, applied as one unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    changes: Vec<PendingChange>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: PendingChange) {
        self.changes.push(change);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn into_changes(self) -> Vec<PendingChange> {
        self.changes
    }
}

/// Backing store for Product entities
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List every stored product (order unspecified)
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Check whether a product exists
    async fn exists(&self, id: &ProductId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Apply staged changes atomically, returning the number of affected records.
    ///
    /// Fails with `AlreadyExists` when adding an existing id and with `NotFound`
    /// when updating or removing a missing one. Nothing is applied on failure.
    async fn apply(&self, changes: ChangeSet) -> Result<u64, DomainError>;
}
