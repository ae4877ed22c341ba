use thiserror::Error;

use crate::models::ProductId;

/// Every handler outcome other than success.
///
/// `NotFound` is the "absent" state of the tri-state result and is kept apart
/// from the failures (`Validation`, `Database`, `Internal`). A tolerance check
/// that comes back `false` is a success, never `NotFound`.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ProductError::Validation(_))
    }

    /// Unexpected failure from a port
    pub fn is_fault(&self) -> bool {
        matches!(self, ProductError::Database(_) | ProductError::Internal(_))
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(err: validator::ValidationErrors) -> Self {
        ProductError::Validation(err.to_string())
    }
}
