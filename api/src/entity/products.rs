use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Product, ProductId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert SeaORM model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            price: model.price,
        }
    }
}

/// Build a fully populated active model for inserts
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Set(product.id.0),
            name: Set(product.name),
            price: Set(product.price),
        }
    }
}
