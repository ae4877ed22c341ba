use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::{ProductError, ProductResult};

/// Storage-assigned product identity
pub type ProductId = i32;

/// Custom validator for product names: at least one non-whitespace character
pub fn validate_product_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(validator::ValidationError::new("blank_product_name")
            .with_message(Cow::Borrowed("name must not be empty or whitespace")));
    }
    Ok(())
}

fn check_name(field: &str, name: &str) -> ProductResult<()> {
    validate_product_name(name)
        .map_err(|_| ProductError::Validation(format!("{} must not be empty or whitespace", field)))
}

/// Weights are kilograms in `[0, f64::MAX]`; NaN and infinities are rejected.
pub(crate) fn check_weight(field: &str, weight: f64) -> ProductResult<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(ProductError::Validation(format!(
            "{} must be a finite number of kilograms >= 0, got {}",
            field, weight
        )))
    }
}

/// Product entity
///
/// Name and weight invariants hold after every constructor and mutator call;
/// a failed mutation leaves the product untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    weight: f64,
}

impl Product {
    /// Create a product that has not been stored yet
    pub fn new(name: impl Into<String>, weight: f64) -> ProductResult<Self> {
        let name = name.into();
        check_name("name", &name)?;
        check_weight("weight", weight)?;

        Ok(Self {
            id: None,
            name,
            weight,
        })
    }

    /// Attach the identity assigned by storage
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// `None` until storage has assigned an id
    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn update_name(&mut self, new_name: impl Into<String>) -> ProductResult<()> {
        let new_name = new_name.into();
        check_name("new_name", &new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn update_weight(&mut self, new_weight: f64) -> ProductResult<()> {
        check_weight("new_weight", new_weight)?;
        self.weight = new_weight;
        Ok(())
    }
}

/// Read-only projection returned by the query services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    /// Weight in kilograms
    pub weight: f64,
}

impl ProductDto {
    pub fn new(id: ProductId, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }
}

/// Optional skip/take window for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProductPage {
    pub skip: Option<u64>,
    pub take: Option<u64>,
}
