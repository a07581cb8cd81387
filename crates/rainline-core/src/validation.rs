//! # Validation Module
//!
//! Input validation for quote requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (diagram canvas)                                    │
//! │  ├── Basic format checks (empty, negative)                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pipeline entry (rainline-engine)                             │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: element-level rules                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Expansion & pricing                                          │
//! │  └── Unpriced identifiers fail the computation                         │
//! │                                                                         │
//! │  The reference behavior: reject the whole request, naming the          │
//! │  offending identifier.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Element;
use crate::MAX_QUOTE_ELEMENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single element.
///
/// ## Rules
/// - `asset_id` must not be empty (after trimming)
/// - `quantity` must be a finite number and must not be negative
///   (zero is fine; expansion ignores it)
/// - `length_mm`, when present, must be finite; a negative measured length
///   is tolerated here and ignored by the expansion rules
///
/// ## Example
/// ```rust
/// use rainline_core::types::Element;
/// use rainline_core::validation::validate_element;
///
/// assert!(validate_element(&Element::new("GUT-SC-MAR-3M", 2.0)).is_ok());
/// assert!(validate_element(&Element::new("", 1.0)).is_err());
/// assert!(validate_element(&Element::new("DROPPER", -1.0)).is_err());
/// ```
pub fn validate_element(element: &Element) -> ValidationResult<()> {
    if element.asset_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "assetId".to_string(),
        });
    }

    if !element.quantity.is_finite() {
        return Err(ValidationError::NotFinite {
            asset_id: element.asset_id.clone(),
            field: "quantity".to_string(),
        });
    }

    if element.quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity {
            asset_id: element.asset_id.clone(),
        });
    }

    if let Some(length_mm) = element.length_mm {
        if !length_mm.is_finite() {
            return Err(ValidationError::NotFinite {
                asset_id: element.asset_id.clone(),
                field: "lengthMillimeters".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a batch of elements.
///
/// ## Rules
/// - The batch must not exceed [`MAX_QUOTE_ELEMENTS`]
/// - Every element must pass [`validate_element`]
pub fn validate_elements(elements: &[Element]) -> ValidationResult<()> {
    if elements.len() > MAX_QUOTE_ELEMENTS {
        return Err(ValidationError::TooManyElements {
            max: MAX_QUOTE_ELEMENTS,
        });
    }

    for element in elements {
        validate_element(element)?;
    }

    Ok(())
}

/// Validates labour hours.
///
/// ## Rules
/// - Must be a finite number
/// - Must not be negative (zero hours is a valid quote)
pub fn validate_labour_hours(hours: f64) -> ValidationResult<()> {
    if !hours.is_finite() {
        return Err(ValidationError::NotFinite {
            asset_id: "labour".to_string(),
            field: "labourHours".to_string(),
        });
    }

    if hours < 0.0 {
        return Err(ValidationError::NegativeQuantity {
            asset_id: "labour".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_element() {
        assert!(validate_element(&Element::new("GUT-SC-MAR-3M", 2.0)).is_ok());
        assert!(validate_element(&Element::new("DROPPER", 0.0)).is_ok());
        assert!(validate_element(&Element::with_length("DP-65", 1.0, 2400.0)).is_ok());

        assert!(validate_element(&Element::new("", 1.0)).is_err());
        assert!(validate_element(&Element::new("   ", 1.0)).is_err());
        assert!(validate_element(&Element::new("DROPPER", -1.0)).is_err());
        assert!(validate_element(&Element::new("DROPPER", f64::NAN)).is_err());
        assert!(validate_element(&Element::with_length("DP-65", 1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_negative_length_is_tolerated() {
        // Expansion ignores it and falls back to stock-length arithmetic.
        assert!(validate_element(&Element::with_length("GUT-SC-MAR-3M", 1.0, -10.0)).is_ok());
    }

    #[test]
    fn test_validate_elements_batch_limit() {
        let elements: Vec<Element> = (0..=MAX_QUOTE_ELEMENTS)
            .map(|i| Element::new(format!("SCR-SS-{i}"), 1.0))
            .collect();
        assert!(matches!(
            validate_elements(&elements),
            Err(ValidationError::TooManyElements { .. })
        ));

        assert!(validate_elements(&elements[..MAX_QUOTE_ELEMENTS]).is_ok());
    }

    #[test]
    fn test_validate_labour_hours() {
        assert!(validate_labour_hours(0.0).is_ok());
        assert!(validate_labour_hours(7.5).is_ok());
        assert!(validate_labour_hours(-1.0).is_err());
        assert!(validate_labour_hours(f64::NAN).is_err());
    }
}
