//! Products controller
//!
//! Maps the five CRUD operations onto a persistence context. Each operation
//! opens its own `ProductContext`, so the controller itself holds no mutable
//! state and can be shared across requests.

use std::sync::Arc;

use crate::app::{ActionResult, ProductContext};
use crate::domain::entities::{Product, ProductId, ProductInput};
use crate::domain::ports::ProductStore;
use crate::error::{AppError, DomainError};

/// Route under which products are served
pub const PRODUCTS_ROUTE: &str = "/api/products";

/// Location of the Get operation for a product
pub fn product_location(id: &ProductId) -> String {
    format!("{}/{}", PRODUCTS_ROUTE, id)
}

pub struct ProductsController<S>
where
    S: ProductStore,
{
    store: Arc<S>,
}

impl<S> ProductsController<S>
where
    S: ProductStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn context(&self) -> ProductContext<S> {
        ProductContext::new(self.store.clone())
    }

    /// List every product
    pub async fn list(&self) -> Result<ActionResult<Vec<Product>>, AppError> {
        let products = self.context().list().await?;
        Ok(ActionResult::Ok(products))
    }

    /// Get a single product
    pub async fn get(&self, id: &ProductId) -> Result<ActionResult<Product>, AppError> {
        match self.context().find_by_id(id).await? {
            Some(product) => Ok(ActionResult::Ok(product)),
            None => Ok(ActionResult::NotFound),
        }
    }

    /// Create a product, generating an id when the caller did not supply one
    pub async fn create(&self, input: ProductInput) -> Result<ActionResult<Product>, AppError> {
        let product = input.into_product();

        let mut context = self.context();
        context.add(product.clone());
        context.commit().await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");

        Ok(ActionResult::Created {
            location: product_location(&product.id),
            value: product,
        })
    }

    /// Replace a product's fields.
    ///
    /// The body must carry the same id as the path.
    pub async fn update(
        &self,
        id: &ProductId,
        input: ProductInput,
    ) -> Result<ActionResult<()>, AppError> {
        if input.id != Some(*id) {
            return Ok(ActionResult::BadRequest(format!(
                "Body id does not match product {}",
                id
            )));
        }

        let mut context = self.context();
        context.update(input.into_product());

        match context.commit().await {
            Ok(_) => {}
            Err(DomainError::NotFound(msg)) => {
                if !context.exists(id).await? {
                    return Ok(ActionResult::NotFound);
                }
                // The row came back between the failed write and the re-check
                return Err(AppError::Internal(format!(
                    "Concurrent update of product {}: {}",
                    id, msg
                )));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(product_id = %id, "Product updated");
        Ok(ActionResult::NoContent)
    }

    /// Delete a product
    pub async fn delete(&self, id: &ProductId) -> Result<ActionResult<()>, AppError> {
        let mut context = self.context();

        let Some(product) = context.find_by_id(id).await? else {
            return Ok(ActionResult::NotFound);
        };

        context.remove(&product);
        context.commit().await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(ActionResult::NoContent)
    }
}
