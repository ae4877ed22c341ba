use std::sync::Arc;
use tracing::instrument;

use super::{FilterByWeight, check_weight_range};
use crate::error::ProductResult;
use crate::models::ProductDto;
use crate::queries::FilterByWeightQueryService;

pub struct FilterByWeightHandler<Q: FilterByWeightQueryService + ?Sized> {
    query: Arc<Q>,
}

impl<Q: FilterByWeightQueryService + ?Sized> FilterByWeightHandler<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self { query }
    }

    /// Products with `min_weight <= weight <= max_weight`; an empty match is a success
    #[instrument(skip(self))]
    pub async fn handle(&self, input: FilterByWeight) -> ProductResult<Vec<ProductDto>> {
        check_weight_range(&input, input.min_weight, input.max_weight)?;

        let products = self
            .query
            .filter_by_weight(input.min_weight, input.max_weight)
            .await?;

        tracing::debug!(count = products.len(), "Filtered products by weight");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::MockFilterByWeightQueryService;
    use mockall::predicate::eq;

    fn request(min_weight: f64, max_weight: f64) -> FilterByWeight {
        FilterByWeight {
            min_weight,
            max_weight,
        }
    }

    #[tokio::test]
    async fn test_filter_delegates_bounds() {
        let mut mock_query = MockFilterByWeightQueryService::new();
        mock_query
            .expect_filter_by_weight()
            .with(eq(5.0), eq(15.0))
            .times(1)
            .returning(|_, _| Ok(vec![ProductDto::new(1, "Box", 10.0)]));

        let handler = FilterByWeightHandler::new(Arc::new(mock_query));
        let products = handler.handle(request(5.0, 15.0)).await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_filter_rejects_inverted_range_without_querying() {
        let mut mock_query = MockFilterByWeightQueryService::new();
        mock_query.expect_filter_by_weight().never();

        let handler = FilterByWeightHandler::new(Arc::new(mock_query));
        let err = handler.handle(request(15.0, 5.0)).await.unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_filter_rejects_negative_bound_without_querying() {
        let mut mock_query = MockFilterByWeightQueryService::new();
        mock_query.expect_filter_by_weight().never();

        let handler = FilterByWeightHandler::new(Arc::new(mock_query));
        let err = handler.handle(request(-5.0, 15.0)).await.unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_filter_accepts_full_range() {
        let mut mock_query = MockFilterByWeightQueryService::new();
        mock_query
            .expect_filter_by_weight()
            .with(eq(0.0), eq(f64::MAX))
            .returning(|_, _| Ok(vec![]));

        let handler = FilterByWeightHandler::new(Arc::new(mock_query));
        let products = handler.handle(request(0.0, f64::MAX)).await.unwrap();

        assert!(products.is_empty());
    }
}
