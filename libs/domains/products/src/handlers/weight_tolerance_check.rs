use std::sync::Arc;
use tracing::instrument;

use super::{WeightToleranceCheck, check_weight_range};
use crate::error::{ProductError, ProductResult};
use crate::queries::WeightToleranceQueryService;
use crate::repository::ProductRepository;

/// Checks a stored product's weight against an inclusive range
///
/// An unknown product is `NotFound`; the tolerance query only runs for a
/// product the repository knows about.
pub struct WeightToleranceCheckHandler<R, Q>
where
    R: ProductRepository + ?Sized,
    Q: WeightToleranceQueryService + ?Sized,
{
    repository: Arc<R>,
    query: Arc<Q>,
}

impl<R, Q> WeightToleranceCheckHandler<R, Q>
where
    R: ProductRepository + ?Sized,
    Q: WeightToleranceQueryService + ?Sized,
{
    pub fn new(repository: Arc<R>, query: Arc<Q>) -> Self {
        Self { repository, query }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, input: WeightToleranceCheck) -> ProductResult<bool> {
        check_weight_range(&input, input.min_weight, input.max_weight)?;

        if self.repository.get_by_id(input.product_id).await?.is_none() {
            tracing::warn!(product_id = input.product_id, "Product not found");
            return Err(ProductError::NotFound(input.product_id));
        }

        let within = self
            .query
            .check_tolerance(input.product_id, input.min_weight, input.max_weight)
            .await?;

        tracing::info!(product_id = input.product_id, within, "Weight tolerance checked");
        Ok(within)
    }
}
