// Copyright 2025 Cowboy AI, LLC.

//! Error types for catalog loading
//!
//! Only building a catalog or restoring a saved selection can fail. Toggling,
//! filtering and comparison absorb their edge cases and never return these.

use thiserror::Error;

/// Errors that can occur while loading or querying a catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two products share the same id
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Product not found in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Rating outside the 0..=5 range
    #[error("Invalid rating for product {id}: {rating}")]
    InvalidRating {
        /// Product carrying the rating
        id: String,
        /// Offending value
        rating: f64,
    },

    /// A required string field is empty
    #[error("Empty field `{field}` on product {id:?}")]
    EmptyField {
        /// Product carrying the field (may itself be empty)
        id: String,
        /// Name of the field
        field: &'static str,
    },

    /// A restored selection breaks the size or uniqueness rule
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl CatalogError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ProductNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateProductId(_)
                | CatalogError::InvalidRating { .. }
                | CatalogError::EmptyField { .. }
                | CatalogError::InvalidSelection(_)
        )
    }
}
