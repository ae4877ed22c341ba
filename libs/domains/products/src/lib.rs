//! Products Domain
//!
//! Products identified by name and weight, with handlers to create, list,
//! filter by weight and check a product's weight against a tolerance range.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Dispatcher  │  ← ProductRequest → handler
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Handlers   │  ← Validation, orchestration
//! └──────┬───────┘
//!        │
//! ┌──────▼─────────────────┐
//! │ Repository │ Queries   │  ← Write port, read ports (SQLite + in-memory)
//! └──────┬─────────────────┘
//!        │
//! ┌──────▼───────┐
//! │    Models    │  ← Product entity, DTOs
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_products::{CreateProduct, InMemoryProductStore, ProductDispatcher};
//!
//! # async fn example() -> Result<(), domain_products::ProductError> {
//! let dispatcher = ProductDispatcher::from_store(Arc::new(InMemoryProductStore::new()));
//! let _response = dispatcher
//!     .dispatch(CreateProduct::new("Box", 10.0).into())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod repository;
pub mod sqlite;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::{
    CreateProduct, FilterByWeight, ListProducts, ProductDispatcher, ProductRequest,
    ProductResponse, WeightToleranceCheck,
};
pub use models::{Product, ProductDto, ProductId, ProductPage};
pub use queries::{
    FilterByWeightQueryService, ListProductsQueryService, WeightToleranceQueryService,
};
pub use repository::{InMemoryProductStore, ProductRepository};
pub use sqlite::{
    SqliteFilterByWeightQuery, SqliteListProductsQuery, SqliteProductRepository,
    SqliteWeightToleranceQuery,
};
