//! Product handlers
//!
//! Thin wrappers that extract path and body, call the controller, and let the
//! returned `ActionResult` pick the status code.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::app::ActionResult;
use crate::domain::entities::{Product, ProductId, ProductInput};
use crate::error::AppError;
use crate::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ActionResult<Vec<Product>>, AppError> {
    state.products.list().await
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ActionResult<Product>, AppError> {
    state.products.get(&ProductId(id)).await
}

/// POST /api/products
///
/// Responds 201 with a `Location` header pointing at the new product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<ActionResult<Product>, AppError> {
    state.products.create(input).await
}

/// PUT /api/products/:id
///
/// The body must repeat the path id.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProductInput>,
) -> Result<ActionResult<()>, AppError> {
    state.products.update(&ProductId(id), input).await
}

/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ActionResult<()>, AppError> {
    state.products.delete(&ProductId(id)).await
}
