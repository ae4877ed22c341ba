use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use super::CreateProduct;
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductId};
use crate::repository::ProductRepository;

/// Validates and stores a new product, returning its id
pub struct CreateProductHandler<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProductRepository + ?Sized> CreateProductHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(name = %input.name, weight = input.weight))]
    pub async fn handle(&self, input: CreateProduct) -> ProductResult<ProductId> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = Product::new(input.name, input.weight)?;
        let stored = self.repository.add(product).await?;

        let id = stored.id().ok_or_else(|| {
            ProductError::Internal("repository returned a product without an id".to_string())
        })?;

        tracing::info!(product_id = id, "Product created");
        Ok(id)
    }
}
