use domain_products::{CreateProduct, ListProducts, ProductResponse, ProductResult};
use tracing::{debug, info};

use crate::app::App;

pub const SEED_PRODUCT_NAME: &str = "TestProduct";
pub const SEED_PRODUCT_WEIGHT: f64 = 85.0;

/// Insert the sample product when no products are stored yet.
///
/// Returns whether a product was inserted.
pub async fn seed_if_empty(app: &App) -> ProductResult<bool> {
    let probe = ListProducts {
        skip: None,
        take: Some(1),
    };

    if let ProductResponse::Products(existing) = app.execute(probe.into()).await? {
        if !existing.is_empty() {
            debug!("Products table already populated, skipping seed");
            return Ok(false);
        }
    }

    let seed = CreateProduct::new(SEED_PRODUCT_NAME, SEED_PRODUCT_WEIGHT);
    app.execute(seed.into()).await?;

    info!(name = SEED_PRODUCT_NAME, weight = SEED_PRODUCT_WEIGHT, "Seeded products table");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_products::{InMemoryProductStore, ProductDispatcher, ProductDto};
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        let dispatcher = ProductDispatcher::from_store(Arc::new(InMemoryProductStore::new()));
        App::new(dispatcher, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_seed_inserts_sample_into_empty_store() {
        let app = app();

        assert!(seed_if_empty(&app).await.unwrap());

        let listed = app.execute(ListProducts::default().into()).await.unwrap();
        assert_eq!(
            listed,
            ProductResponse::Products(vec![ProductDto::new(1, "TestProduct", 85.0)])
        );
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let app = app();

        assert!(seed_if_empty(&app).await.unwrap());
        assert!(!seed_if_empty(&app).await.unwrap());

        let listed = app.execute(ListProducts::default().into()).await.unwrap();
        assert!(matches!(listed, ProductResponse::Products(ref p) if p.len() == 1));
    }
}
