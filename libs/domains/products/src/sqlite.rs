//! SQLite adapters for the repository and query services

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::entity;
use crate::error::ProductResult;
use crate::handlers::ProductDispatcher;
use crate::models::{Product, ProductDto, ProductId, ProductPage};
use crate::queries::{
    FilterByWeightQueryService, ListProductsQueryService, WeightToleranceQueryService,
};
use crate::repository::ProductRepository;

// sqlx binds integers as i64
const MAX_ROWS: u64 = i64::MAX as u64;

pub struct SqliteProductRepository {
    db: DatabaseConnection,
}

impl SqliteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn add(&self, product: Product) -> ProductResult<Product> {
        let active_model = entity::ActiveModel::from(&product);
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Product::try_from(model)
    }

    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Product::try_from)
            .transpose()
    }
}

pub struct SqliteListProductsQuery {
    db: DatabaseConnection,
}

impl SqliteListProductsQuery {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListProductsQueryService for SqliteListProductsQuery {
    async fn list(&self, page: ProductPage) -> ProductResult<Vec<ProductDto>> {
        let mut query = entity::Entity::find().order_by_asc(entity::Column::Id);

        // SQLite needs a LIMIT whenever an OFFSET is given
        if page.skip.is_some() || page.take.is_some() {
            query = query
                .offset(page.skip.map(|s| s.min(MAX_ROWS)))
                .limit(page.take.unwrap_or(MAX_ROWS).min(MAX_ROWS));
        }

        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(ProductDto::from).collect())
    }
}

pub struct SqliteFilterByWeightQuery {
    db: DatabaseConnection,
}

impl SqliteFilterByWeightQuery {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FilterByWeightQueryService for SqliteFilterByWeightQuery {
    async fn filter_by_weight(
        &self,
        min_weight: f64,
        max_weight: f64,
    ) -> ProductResult<Vec<ProductDto>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Weight.gte(min_weight))
            .filter(entity::Column::Weight.lte(max_weight))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(ProductDto::from).collect())
    }
}

pub struct SqliteWeightToleranceQuery {
    db: DatabaseConnection,
}

impl SqliteWeightToleranceQuery {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WeightToleranceQueryService for SqliteWeightToleranceQuery {
    async fn check_tolerance(
        &self,
        id: ProductId,
        min_weight: f64,
        max_weight: f64,
    ) -> ProductResult<bool> {
        let within = entity::Entity::find_by_id(id)
            .filter(entity::Column::Weight.gte(min_weight))
            .filter(entity::Column::Weight.lte(max_weight))
            .one(&self.db)
            .await?
            .is_some();

        Ok(within)
    }
}

/// Dispatcher wired to SQLite adapters sharing one connection pool
pub fn dispatcher(db: DatabaseConnection) -> ProductDispatcher {
    ProductDispatcher::new(
        Arc::new(SqliteProductRepository::new(db.clone())),
        Arc::new(SqliteListProductsQuery::new(db.clone())),
        Arc::new(SqliteFilterByWeightQuery::new(db.clone())),
        Arc::new(SqliteWeightToleranceQuery::new(db)),
    )
}
