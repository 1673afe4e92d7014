//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::{ChangeSet, PendingChange, ProductStore};
use crate::error::DomainError;

use super::mock_set::EntitySet;

// ============================================================================
// In-Memory Product Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().insert(product.id, product);
        self
    }

    /// Copy of the committed state
    pub fn snapshot(&self) -> HashMap<ProductId, Product> {
        self.products.read().unwrap().clone()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.get(id).cloned())
    }

    async fn apply(&self, changes: ChangeSet) -> Result<u64, DomainError> {
        let mut products = self.products.write().unwrap();

        // Work on a copy so a failing change leaves the store untouched
        let mut staged = products.clone();
        let mut affected = 0;

        for change in changes.into_changes() {
            match change {
                PendingChange::Add(product) => {
                    if staged.contains_key(&product.id) {
                        return Err(DomainError::AlreadyExists(format!(
                            "Product {} already exists",
                            product.id
                        )));
                    }
                    staged.insert(product.id, product);
                }
                PendingChange::Update(product) => match staged.get_mut(&product.id) {
                    Some(existing) => *existing = product,
                    None => {
                        return Err(DomainError::NotFound(format!(
                            "Product {} not found",
                            product.id
                        )))
                    }
                },
                PendingChange::Remove(id) => {
                    if staged.remove(&id).is_none() {
                        return Err(DomainError::NotFound(format!("Product {} not found", id)));
                    }
                }
            }
            affected += 1;
        }

        *products = staged;
        Ok(affected)
    }
}

// ============================================================================
// Entity-Set Backed Product Store
// ============================================================================

/// Store over a bare entity set; only additions can be committed
pub struct SetBackedProductStore<E>
where
    E: EntitySet<Product>,
{
    set: E,
}

impl<E> SetBackedProductStore<E>
where
    E: EntitySet<Product>,
{
    pub fn new(set: E) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &E {
        &self.set
    }
}

#[async_trait]
impl<E> ProductStore for SetBackedProductStore<E>
where
    E: EntitySet<Product>,
{
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.set.enumerate())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.set.enumerate().into_iter().find(|p| p.id == *id))
    }

    async fn apply(&self, changes: ChangeSet) -> Result<u64, DomainError> {
        let changes = changes.into_changes();

        if let Some(change) = changes
            .iter()
            .find(|c| !matches!(c, PendingChange::Add(_)))
        {
            return Err(DomainError::Internal(format!(
                "Entity set only supports additions, got change for {}",
                change.product_id()
            )));
        }

        // Reject ids already in the set as well as ids repeated within the batch
        let mut seen: HashSet<ProductId> = self.set.enumerate().iter().map(|p| p.id).collect();
        if let Some(dup) = changes
            .iter()
            .map(PendingChange::product_id)
            .find(|id| !seen.insert(*id))
        {
            return Err(DomainError::AlreadyExists(format!(
                "Product {} already exists",
                dup
            )));
        }

        let mut affected = 0;
        for change in changes {
            if let PendingChange::Add(product) = change {
                self.set.add_async(product).await;
                affected += 1;
            }
        }
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_set_mock, test_product_named};

    fn single(change: PendingChange) -> ChangeSet {
        let mut changes = ChangeSet::new();
        changes.push(change);
        changes
    }

    #[tokio::test]
    async fn in_memory_stores_are_isolated() {
        let first = InMemoryProductStore::new();
        let second = InMemoryProductStore::new();

        first
            .apply(single(PendingChange::Add(test_product_named("Product1", 10.0))))
            .await
            .unwrap();

        assert_eq!(first.list().await.unwrap().len(), 1);
        assert!(second.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn in_memory_duplicate_add_is_rejected() {
        let product = test_product_named("Product1", 10.0);
        let store = InMemoryProductStore::new().with_product(product.clone());

        let result = store.apply(single(PendingChange::Add(product))).await;
        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn set_backed_store_rejects_update_before_adding() {
        let existing = test_product_named("Product1", 10.0);
        let store = SetBackedProductStore::new(create_set_mock(vec![existing.clone()]));

        let mut changes = ChangeSet::new();
        changes.push(PendingChange::Add(test_product_named("Product2", 20.0)));
        changes.push(PendingChange::Update(existing.clone()));

        let result = store.apply(changes).await;
        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert_eq!(store.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn set_backed_store_rejects_repeated_id_in_batch() {
        let existing = test_product_named("Product1", 10.0);
        let store = SetBackedProductStore::new(create_set_mock(vec![existing.clone()]));

        let repeated = test_product_named("Product2", 20.0);
        let mut changes = ChangeSet::new();
        changes.push(PendingChange::Add(repeated.clone()));
        changes.push(PendingChange::Add(Product {
            name: "Product3".to_string(),
            ..repeated
        }));

        let result = store.apply(changes).await;
        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(store.list().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn set_backed_store_finds_added_product() {
        let store = SetBackedProductStore::new(create_set_mock(Vec::<Product>::new()));
        let product = test_product_named("Product1", 10.0);

        store
            .apply(single(PendingChange::Add(product.clone())))
            .await
            .unwrap();

        assert_eq!(store.find_by_id(&product.id).await.unwrap(), Some(product));
    }
}
