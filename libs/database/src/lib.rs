//! Database connectors and utilities for the weight-control workspace
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://weight_control.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db, "weight-control").await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
