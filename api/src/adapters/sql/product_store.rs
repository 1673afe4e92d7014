//! SeaORM adapter for ProductStore

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::{ChangeSet, PendingChange, ProductStore};
use crate::entity::products;
use crate::error::DomainError;

/// SeaORM implementation of ProductStore
pub struct SqlProductStore {
    db: DatabaseConnection,
}

impl SqlProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn apply_change(
        txn: &DatabaseTransaction,
        change: PendingChange,
    ) -> Result<u64, DomainError> {
        match change {
            PendingChange::Add(product) => {
                let id = product.id;
                products::Entity::insert(products::ActiveModel::from(product))
                    .exec_without_returning(txn)
                    .await
                    .map_err(|e| match e.sql_err() {
                        Some(SqlErr::UniqueConstraintViolation(_)) => {
                            DomainError::AlreadyExists(format!("Product {} already exists", id))
                        }
                        _ => DomainError::Database(e.to_string()),
                    })
            }
            PendingChange::Update(product) => {
                let id = product.id;
                let result = products::Entity::update_many()
                    .set(products::ActiveModel {
                        name: Set(product.name),
                        price: Set(product.price),
                        ..Default::default()
                    })
                    .filter(products::Column::Id.eq(id.0))
                    .exec(txn)
                    .await
                    .map_err(database_error)?;

                if result.rows_affected == 0 {
                    return Err(DomainError::NotFound(format!("Product {} not found", id)));
                }
                Ok(result.rows_affected)
            }
            PendingChange::Remove(id) => {
                let result = products::Entity::delete_by_id(id.0)
                    .exec(txn)
                    .await
                    .map_err(database_error)?;

                if result.rows_affected == 0 {
                    return Err(DomainError::NotFound(format!("Product {} not found", id)));
                }
                Ok(result.rows_affected)
            }
        }
    }
}

fn database_error(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl ProductStore for SqlProductStore {
    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .all(&self.db)
            .await
            .map_err(database_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(database_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn apply(&self, changes: ChangeSet) -> Result<u64, DomainError> {
        if changes.is_empty() {
            return Ok(0);
        }

        // Dropping the transaction on an early return rolls it back
        let txn = self.db.begin().await.map_err(database_error)?;

        let mut affected = 0;
        for change in changes.into_changes() {
            let product_id = change.product_id();
            affected += Self::apply_change(&txn, change).await.inspect_err(|e| {
                tracing::debug!(
                    product_id = %product_id,
                    error = %e,
                    "Change rejected, rolling back"
                );
            })?;
        }

        txn.commit().await.map_err(database_error)?;
        Ok(affected)
    }
}
