//! # Pipeline Error Type
//!
//! Unified error type at the quote pipeline boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at the Pipeline Boundary                  │
//! │                                                                         │
//! │  calculate_quote(request)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Validation failed? ── ValidationError ──► InvalidInput (400)    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog read failed? ── DbError ──► CatalogUnavailable (503)    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Identifier unpriced? ── QuoteError ──► UnpricedProduct (422)    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──► Quote                                               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The HTTP layer maps each kind to a status; the frontend receives      │
//! │  { "code": "UNPRICED_PRODUCT", "message": "product BRK-SC-MAR ..." }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use rainline_core::{QuoteError, ValidationError};
use rainline_db::DbError;

/// Errors leaving the quote pipeline.
///
/// Exactly three kinds, so callers can map them to HTTP statuses without
/// inspecting messages:
/// - bad request data → [`QuoteServiceError::InvalidInput`]
/// - a line that cannot price → [`QuoteServiceError::UnpricedProduct`]
/// - the catalog itself failing → [`QuoteServiceError::CatalogUnavailable`]
#[derive(Debug, Error)]
pub enum QuoteServiceError {
    /// The request failed validation before any computation ran.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// An expanded material or labour identifier has no usable price.
    /// The message names the identifier; no partial quote is returned.
    #[error("product {0} not found or missing pricing")]
    UnpricedProduct(String),

    /// The catalog read failed. Transient from the caller's perspective;
    /// the request itself may be perfectly fine.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] DbError),
}

impl From<QuoteError> for QuoteServiceError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::UnpricedProduct(id) => QuoteServiceError::UnpricedProduct(id),
            QuoteError::Validation(e) => QuoteServiceError::InvalidInput(e),
        }
    }
}

/// Machine-readable error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    InvalidInput,

    /// An identifier could not be priced (422)
    UnpricedProduct,

    /// Catalog read failed (503)
    CatalogUnavailable,
}

/// Serializable error body for the HTTP layer.
///
/// ```json
/// {
///   "code": "UNPRICED_PRODUCT",
///   "message": "product BRK-SC-MAR not found or missing pricing"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl QuoteServiceError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteServiceError::InvalidInput(_) => ErrorCode::InvalidInput,
            QuoteServiceError::UnpricedProduct(_) => ErrorCode::UnpricedProduct,
            QuoteServiceError::CatalogUnavailable(_) => ErrorCode::CatalogUnavailable,
        }
    }

    /// Converts into the serializable response body.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Result type for pipeline operations.
pub type ServiceResult<T> = Result<T, QuoteServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_error_mapping() {
        let err: QuoteServiceError =
            QuoteError::UnpricedProduct("BRK-SC-MAR".to_string()).into();
        assert_eq!(err.code(), ErrorCode::UnpricedProduct);
        assert_eq!(
            err.to_string(),
            "product BRK-SC-MAR not found or missing pricing"
        );

        let err: QuoteServiceError = QuoteError::Validation(ValidationError::Required {
            field: "assetId".to_string(),
        })
        .into();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_response_serialization() {
        let err = QuoteServiceError::UnpricedProduct("SCR-SS".to_string());
        let json = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(json["code"], "UNPRICED_PRODUCT");
        assert!(json["message"].as_str().unwrap().contains("SCR-SS"));
    }
}
