use std::sync::Arc;
use tracing::instrument;

use super::ListProducts;
use crate::error::ProductResult;
use crate::models::{ProductDto, ProductPage};
use crate::queries::ListProductsQueryService;

pub struct ListProductsHandler<Q: ListProductsQueryService + ?Sized> {
    query: Arc<Q>,
}

impl<Q: ListProductsQueryService + ?Sized> ListProductsHandler<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self { query }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, input: ListProducts) -> ProductResult<Vec<ProductDto>> {
        let page = ProductPage {
            skip: input.skip,
            take: input.take,
        };

        let products = self.query.list(page).await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::queries::MockListProductsQueryService;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_list_passes_page_through() {
        let mut mock_query = MockListProductsQueryService::new();
        mock_query
            .expect_list()
            .with(eq(ProductPage {
                skip: Some(2),
                take: Some(5),
            }))
            .times(1)
            .returning(|_| Ok(vec![ProductDto::new(3, "Box", 10.0)]));

        let handler = ListProductsHandler::new(Arc::new(mock_query));
        let products = handler
            .handle(ListProducts {
                skip: Some(2),
                take: Some(5),
            })
            .await
            .unwrap();

        assert_eq!(products, vec![ProductDto::new(3, "Box", 10.0)]);
    }

    #[tokio::test]
    async fn test_list_empty_is_success() {
        let mut mock_query = MockListProductsQueryService::new();
        mock_query.expect_list().returning(|_| Ok(vec![]));

        let handler = ListProductsHandler::new(Arc::new(mock_query));
        let products = handler.handle(ListProducts::default()).await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_list_propagates_fault() {
        let mut mock_query = MockListProductsQueryService::new();
        mock_query
            .expect_list()
            .returning(|_| Err(ProductError::Database("locked".to_string())));

        let handler = ListProductsHandler::new(Arc::new(mock_query));
        let err = handler.handle(ListProducts::default()).await.unwrap_err();

        assert!(err.is_fault());
    }
}
