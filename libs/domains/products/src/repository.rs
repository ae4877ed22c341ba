use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDto, ProductId, ProductPage};
use crate::queries::{
    FilterByWeightQueryService, ListProductsQueryService, WeightToleranceQueryService,
};

/// Repository trait for Product persistence
///
/// Write side of the domain. Reads for display go through the query services
/// in [`crate::queries`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product and return it with its assigned id
    async fn add(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;
}

fn to_dto(id: ProductId, product: &Product) -> ProductDto {
    ProductDto::new(id, product.name(), product.weight())
}

fn page_bounds(page: ProductPage) -> (usize, usize) {
    let skip = page
        .skip
        .map(|s| usize::try_from(s).unwrap_or(usize::MAX))
        .unwrap_or(0);
    let take = page
        .take
        .map(|t| usize::try_from(t).unwrap_or(usize::MAX))
        .unwrap_or(usize::MAX);
    (skip, take)
}

#[derive(Debug)]
struct Inner {
    next_id: ProductId,
    products: BTreeMap<ProductId, Product>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            next_id: 1,
            products: BTreeMap::new(),
        }
    }
}

/// In-memory store implementing the repository and all query services
/// (for local runs and testing)
///
/// Clones share the same underlying data. Ids start at 1 and are never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn add(&self, product: Product) -> ProductResult<Product> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id space exhausted".to_string()))?;

        let product = product.with_id(id);
        inner.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id).cloned())
    }
}

#[async_trait]
impl ListProductsQueryService for InMemoryProductStore {
    async fn list(&self, page: ProductPage) -> ProductResult<Vec<ProductDto>> {
        let inner = self.inner.read().await;
        let (skip, take) = page_bounds(page);

        Ok(inner
            .products
            .iter()
            .skip(skip)
            .take(take)
            .map(|(id, p)| to_dto(*id, p))
            .collect())
    }
}

#[async_trait]
impl FilterByWeightQueryService for InMemoryProductStore {
    async fn filter_by_weight(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> ProductResult<Vec<ProductDto>> {
        let inner = self.inner.read().await;

        Ok(inner
            .products
            .iter()
            .filter(|(_, p)| p.weight() >= min_weight && p.weight() <= max_weight)
            .map(|(id, p)| to_dto(*id, p))
            .collect())
    }
}

#[async_trait]
impl WeightToleranceQueryService for InMemoryProductStore {
    async fn check_tolerance(
        &self,
        id: ProductId,
        min_weight: f64,
        max_weight: f64,
    ) -> ProductResult<bool> {
        let inner = self.inner.read().await;

        Ok(inner
            .products
            .get(&id)
            .is_some_and(|p| p.weight() >= min_weight && p.weight() <= max_weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(weights: &[f64]) -> InMemoryProductStore {
        let store = InMemoryProductStore::new();
        for (i, weight) in weights.iter().enumerate() {
            let product = Product::new(format!("Product {}", i + 1), *weight).unwrap();
            store.add(product).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let store = InMemoryProductStore::new();

        let first = store.add(Product::new("Box", 10.0).unwrap()).await.unwrap();
        let second = store.add(Product::new("Box", 10.0).unwrap()).await.unwrap();

        assert_eq!(first.id(), Some(1));
        assert_eq!(second.id(), Some(2));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_none_for_unknown_id() {
        let store = seeded(&[1.0]).await;
        assert!(store.get_by_id(99).await.unwrap().is_none());
        assert_eq!(store.get_by_id(1).await.unwrap().unwrap().weight(), 1.0);
    }

    #[tokio::test]
    async fn test_list_honors_skip_and_take() {
        let store = seeded(&[1.0, 2.0, 3.0, 4.0]).await;

        let all = store.list(ProductPage::default()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let window = store
            .list(ProductPage {
                skip: Some(1),
                take: Some(2),
            })
            .await
            .unwrap();
        let ids: Vec<_> = window.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let past_end = store
            .list(ProductPage {
                skip: Some(10),
                take: None,
            })
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_weight_is_inclusive() {
        let store = seeded(&[4.9, 5.0, 10.0, 15.0, 15.1]).await;

        let matched = store.filter_by_weight(5.0, 15.0).await.unwrap();
        let weights: Vec<_> = matched.iter().map(|p| p.weight).collect();

        assert_eq!(weights, vec![5.0, 10.0, 15.0]);
    }

    #[tokio::test]
    async fn test_check_tolerance() {
        let store = seeded(&[10.0]).await;

        assert!(store.check_tolerance(1, 10.0, 10.0).await.unwrap());
        assert!(!store.check_tolerance(1, 10.5, 20.0).await.unwrap());
        assert!(!store.check_tolerance(2, 0.0, 100.0).await.unwrap());
    }
}
