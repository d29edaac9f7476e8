//! # Validation Module
//!
//! Checks applied to products coming from a product source.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Shape of { products: [...] }                                      │
//! │  └── Price parsing (Price::try_from)                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── id non-empty                                                      │
//! │  └── title non-empty, bounded length                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Product list view: invalid products are skipped, never carted         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Product, ProductId};
use crate::MAX_TITLE_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product identifier.
pub fn validate_product_id(id: &ProductId) -> ValidationResult<()> {
    if id.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_title;
///
/// assert!(validate_title("Relogio bonito").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LENGTH,
        });
    }

    Ok(())
}

/// Validates every field of a product that is not already enforced by its type.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_title(&product.title)?;
    Ok(())
}

/// Splits products into the displayable ones and the rejected ones.
///
/// Order of the valid products is preserved.
pub fn partition_valid(products: Vec<Product>) -> (Vec<Product>, Vec<(Product, ValidationError)>) {
    let mut valid = Vec::with_capacity(products.len());
    let mut rejected = Vec::new();

    for product in products {
        match validate_product(&product) {
            Ok(()) => valid.push(product),
            Err(e) => rejected.push((product, e)),
        }
    }

    (valid, rejected)
}

// =============================================================================
// Unit Tests
// =============================================================================
