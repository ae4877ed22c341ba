//! Request handlers, one per use case, and the dispatcher that routes a
//! [`ProductRequest`] to the matching handler.
//!
//! Every handler validates synchronously before touching a port.

mod create;
mod filter_by_weight;
mod list;
mod weight_tolerance_check;

use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{ProductDto, ProductId, validate_product_name};
use crate::queries::{
    FilterByWeightQueryService, ListProductsQueryService, WeightToleranceQueryService,
};
use crate::repository::ProductRepository;

pub use create::CreateProductHandler;
pub use filter_by_weight::FilterByWeightHandler;
pub use list::ListProductsHandler;
pub use weight_tolerance_check::WeightToleranceCheckHandler;

/// Create a product
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateProduct {
    #[validate(custom(function = "validate_product_name"))]
    pub name: String,
    /// Kilograms
    #[validate(range(min = 0.0))]
    pub weight: f64,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// List stored products, optionally windowed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListProducts {
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

/// Products whose weight lies in `[min_weight, max_weight]`
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct FilterByWeight {
    #[validate(range(min = 0.0))]
    pub min_weight: f64,
    #[validate(range(min = 0.0))]
    pub max_weight: f64,
}

/// Whether product `product_id` weighs within `[min_weight, max_weight]`
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct WeightToleranceCheck {
    pub product_id: ProductId,
    #[validate(range(min = 0.0))]
    pub min_weight: f64,
    #[validate(range(min = 0.0))]
    pub max_weight: f64,
}

/// Validate a weight range: both bounds in `[0, f64::MAX]`, then `min <= max`.
pub(crate) fn check_weight_range(
    input: &impl Validate,
    min_weight: f64,
    max_weight: f64,
) -> ProductResult<()> {
    input
        .validate()
        .map_err(|e| ProductError::Validation(e.to_string()))?;

    crate::models::check_weight("min_weight", min_weight)?;
    crate::models::check_weight("max_weight", max_weight)?;

    if min_weight > max_weight {
        return Err(ProductError::Validation(format!(
            "min cannot exceed max ({} > {})",
            min_weight, max_weight
        )));
    }

    Ok(())
}

/// Every request the domain understands
#[derive(Debug, Clone, PartialEq)]
pub enum ProductRequest {
    Create(CreateProduct),
    List(ListProducts),
    FilterByWeight(FilterByWeight),
    WeightToleranceCheck(WeightToleranceCheck),
}

impl ProductRequest {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ProductRequest::Create(_) => "create",
            ProductRequest::List(_) => "list",
            ProductRequest::FilterByWeight(_) => "filter_by_weight",
            ProductRequest::WeightToleranceCheck(_) => "weight_tolerance_check",
        }
    }
}

impl From<CreateProduct> for ProductRequest {
    fn from(request: CreateProduct) -> Self {
        ProductRequest::Create(request)
    }
}

impl From<ListProducts> for ProductRequest {
    fn from(request: ListProducts) -> Self {
        ProductRequest::List(request)
    }
}

impl From<FilterByWeight> for ProductRequest {
    fn from(request: FilterByWeight) -> Self {
        ProductRequest::FilterByWeight(request)
    }
}

impl From<WeightToleranceCheck> for ProductRequest {
    fn from(request: WeightToleranceCheck) -> Self {
        ProductRequest::WeightToleranceCheck(request)
    }
}

/// Success value of a dispatched request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductResponse {
    Created(ProductId),
    Products(Vec<ProductDto>),
    Tolerance(bool),
}

/// Routes requests to their handlers
///
/// Built once from explicit ports; cheap to share behind an `Arc`.
pub struct ProductDispatcher {
    create: CreateProductHandler<dyn ProductRepository>,
    list: ListProductsHandler<dyn ListProductsQueryService>,
    filter_by_weight: FilterByWeightHandler<dyn FilterByWeightQueryService>,
    weight_tolerance_check:
        WeightToleranceCheckHandler<dyn ProductRepository, dyn WeightToleranceQueryService>,
}

impl ProductDispatcher {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        list_query: Arc<dyn ListProductsQueryService>,
        filter_query: Arc<dyn FilterByWeightQueryService>,
        tolerance_query: Arc<dyn WeightToleranceQueryService>,
    ) -> Self {
        Self {
            create: CreateProductHandler::new(repository.clone()),
            list: ListProductsHandler::new(list_query),
            filter_by_weight: FilterByWeightHandler::new(filter_query),
            weight_tolerance_check: WeightToleranceCheckHandler::new(repository, tolerance_query),
        }
    }

    /// Dispatcher over a single store that implements every port
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ProductRepository
            + ListProductsQueryService
            + FilterByWeightQueryService
            + WeightToleranceQueryService
            + 'static,
    {
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }

    #[instrument(skip(self, request), fields(request = request.kind()))]
    pub async fn dispatch(&self, request: ProductRequest) -> ProductResult<ProductResponse> {
        match request {
            ProductRequest::Create(input) => {
                self.create.handle(input).await.map(ProductResponse::Created)
            }
            ProductRequest::List(input) => {
                self.list.handle(input).await.map(ProductResponse::Products)
            }
            ProductRequest::FilterByWeight(input) => self
                .filter_by_weight
                .handle(input)
                .await
                .map(ProductResponse::Products),
            ProductRequest::WeightToleranceCheck(input) => self
                .weight_tolerance_check
                .handle(input)
                .await
                .map(ProductResponse::Tolerance),
        }
    }
}
