//! # Error Types
//!
//! Domain-specific error types for rainline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rainline-core errors (this file)                                      │
//! │  ├── QuoteError       - Quote computation failures                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rainline-db errors (separate crate)                                   │
//! │  └── DbError          - Catalog operation failures                     │
//! │                                                                         │
//! │  rainline-engine errors (pipeline boundary)                            │
//! │  └── QuoteServiceError - What the HTTP layer sees                      │
//! │                                                                         │
//! │  Flow: ValidationError → QuoteError → QuoteServiceError → HTTP status  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending identifier)
//! 3. Errors are enum variants, never String
//! 4. An unpriced product is FATAL: a quote is never returned with a
//!    defaulted or zero price, that would silently misquote a customer

use thiserror::Error;

// =============================================================================
// Quote Error
// =============================================================================

/// Quote computation errors.
///
/// Any of these aborts the whole calculation. There is no partial quote:
/// either every line prices, or the caller gets an error naming the line
/// that did not.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// An expanded material or labour identifier has no usable catalog price.
    ///
    /// ## When This Occurs
    /// - The identifier has no catalog row at all
    /// - The catalog row exists but its cost is absent
    /// - The row was soft-deleted (is_active = false)
    ///
    /// ## Why Fatal
    /// ```text
    /// Expansion emits BRK-SC-MAR × 8
    ///      │
    ///      ▼
    /// Catalog has no row for BRK-SC-MAR
    ///      │
    ///      ▼
    /// UnpricedProduct("BRK-SC-MAR")   ← never a $0.00 line
    /// ```
    #[error("product {0} not found or missing pricing")]
    UnpricedProduct(String),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a request element doesn't meet requirements.
/// Used for early validation before the expansion rules run. The reference
/// behavior rejects the whole request and names the offending identifier.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// An element carries a negative quantity.
    /// Zero is allowed (the element is simply ignored by expansion).
    #[error("element {asset_id}: quantity must not be negative")]
    NegativeQuantity { asset_id: String },

    /// A numeric field is NaN or infinite.
    #[error("element {asset_id}: {field} must be a finite number")]
    NotFinite { asset_id: String, field: String },

    /// The request carries more elements than a single quote may hold.
    #[error("quote cannot have more than {max} elements")]
    TooManyElements { max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuoteError::UnpricedProduct("BRK-SC-MAR".to_string());
        assert_eq!(
            err.to_string(),
            "product BRK-SC-MAR not found or missing pricing"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "assetId".to_string(),
        };
        assert_eq!(err.to_string(), "assetId is required");

        let err = ValidationError::NegativeQuantity {
            asset_id: "DP-65-3M".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "element DP-65-3M: quantity must not be negative"
        );
    }

    #[test]
    fn test_validation_converts_to_quote_error() {
        let validation_err = ValidationError::Required {
            field: "assetId".to_string(),
        };
        let quote_err: QuoteError = validation_err.into();
        assert!(matches!(quote_err, QuoteError::Validation(_)));
    }
}
