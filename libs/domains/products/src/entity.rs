use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::error::ProductError;
use crate::models::{Product, ProductDto};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Kilograms
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// A stored row that breaks the entity invariants is a storage fault.
impl TryFrom<Model> for Product {
    type Error = ProductError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Product::new(model.name, model.weight)
            .map(|p| p.with_id(model.id))
            .map_err(|e| {
                ProductError::Internal(format!("stored product {} is invalid: {}", model.id, e))
            })
    }
}

impl From<Model> for ProductDto {
    fn from(model: Model) -> Self {
        ProductDto::new(model.id, model.name, model.weight)
    }
}

impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(product.name().to_string()),
            weight: Set(product.weight()),
        }
    }
}
