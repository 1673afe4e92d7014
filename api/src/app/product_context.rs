//! Product persistence context
//!
//! A unit of work over a `ProductStore`. Mutations are staged locally and
//! become visible to readers only after `commit`.

use std::sync::Arc;

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::{ChangeSet, PendingChange, ProductStore};
use crate::error::DomainError;

pub struct ProductContext<S>
where
    S: ProductStore,
{
    store: Arc<S>,
    pending: ChangeSet,
}

impl<S> ProductContext<S>
where
    S: ProductStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            pending: ChangeSet::new(),
        }
    }

    /// Stage a new product for insertion
    pub fn add(&mut self, product: Product) {
        self.pending.push(PendingChange::Add(product));
    }

    /// Stage a whole-record replacement keyed by the product's id
    pub fn update(&mut self, product: Product) {
        self.pending.push(PendingChange::Update(product));
    }

    /// Stage removal of a product
    pub fn remove(&mut self, product: &Product) {
        self.pending.push(PendingChange::Remove(product.id));
    }

    /// Look up a committed product
    pub async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.store.find_by_id(id).await
    }

    /// All committed products
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.store.list().await
    }

    pub async fn exists(&self, id: &ProductId) -> Result<bool, DomainError> {
        self.store.exists(id).await
    }

    pub fn has_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply every staged change atomically.
    ///
    /// The staged set is consumed even when the store rejects it.
    pub async fn commit(&mut self) -> Result<u64, DomainError> {
        if !self.has_changes() {
            return Ok(0);
        }

        let changes = std::mem::take(&mut self.pending);
        let staged = changes.len();
        let affected = self.store.apply(changes).await?;

        tracing::debug!(staged, affected, "Committed product changes");
        Ok(affected)
    }
}
