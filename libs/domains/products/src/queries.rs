use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{ProductDto, ProductId, ProductPage};

/// Read side: listing of every stored product
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListProductsQueryService: Send + Sync {
    /// Products in ascending id order, windowed by `page`
    async fn list(&self, page: ProductPage) -> ProductResult<Vec<ProductDto>>;
}

/// Read side: products whose weight lies in an inclusive range
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilterByWeightQueryService: Send + Sync {
    async fn filter_by_weight(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> ProductResult<Vec<ProductDto>>;
}

/// Read side: whether a product's weight lies in an inclusive range
///
/// Returns `false` for an unknown id; callers that need to tell absence apart
/// look the product up first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeightToleranceQueryService: Send + Sync {
    async fn check_tolerance(
        &self,
        id: ProductId,
        min_weight: f64,
        max_weight: f64,
    ) -> ProductResult<bool>;
}
