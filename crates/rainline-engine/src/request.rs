//! # Quote Request DTOs
//!
//! JSON request shapes accepted by the pipeline entry point.
//!
//! ## Two Labour Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Request Shapes (both accepted)                          │
//! │                                                                         │
//! │  Shape A (scalar pair):           Shape B (labour list):               │
//! │  {                                {                                     │
//! │    "elements": [...],               "elements": [...],                  │
//! │    "labourHours": 6.5,              "labour": [                         │
//! │    "labourRateId": "LAB-STD"          { "rateId": "LAB-STD",           │
//! │  }                                      "hours": 6.5 }                  │
//! │                                     ]                                   │
//! │                                   }                                     │
//! │       │                                │                                │
//! │       └──────────┬─────────────────────┘                                │
//! │                  ▼                                                      │
//! │        Vec<Element> labour lines (rate id + hours in quantity)         │
//! │                                                                         │
//! │  When BOTH shapes appear, the labour list wins and the scalar pair     │
//! │  is ignored. A scalar pair with only one half present is rejected.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use rainline_core::validation::validate_labour_hours;
use rainline_core::{Element, ValidationError};

// =============================================================================
// Element Input
// =============================================================================

/// One placed element as the diagram frontend sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInput {
    /// Catalog identifier, e.g. "GUT-SC-MAR-3M".
    pub asset_id: String,

    /// Piece count.
    pub quantity: f64,

    /// Manually measured length in millimetres, if the user overrode the
    /// stock-length assumption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_millimeters: Option<f64>,
}

impl From<&ElementInput> for Element {
    fn from(input: &ElementInput) -> Self {
        Element {
            asset_id: input.asset_id.clone(),
            quantity: input.quantity,
            length_mm: input.length_millimeters,
        }
    }
}

// =============================================================================
// Labour Input
// =============================================================================

/// One labour line in the list shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourInput {
    /// Catalog identifier of the labour rate, e.g. "LAB-STD".
    pub rate_id: String,

    /// Hours for this line. Zero is valid (the rate must still price).
    pub hours: f64,
}

// =============================================================================
// Quote Request
// =============================================================================

/// The full quote request body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Placed elements from the diagram.
    pub elements: Vec<ElementInput>,

    /// Labour lines (list shape). Wins over the scalar pair when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labour: Option<Vec<LabourInput>>,

    /// Labour hours (scalar shape). Requires `labourRateId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labour_hours: Option<f64>,

    /// Labour rate identifier (scalar shape). Requires `labourHours`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labour_rate_id: Option<String>,
}

impl QuoteRequest {
    /// Converts the placed elements into domain elements.
    pub fn elements(&self) -> Vec<Element> {
        self.elements.iter().map(Element::from).collect()
    }

    /// Normalizes both labour shapes into domain labour lines.
    ///
    /// ## Rules
    /// - The `labour` list, when present, wins; the scalar pair is ignored
    /// - The scalar pair must be complete: hours without a rate identifier
    ///   (or vice versa) is rejected, never defaulted
    /// - Hours must be finite and non-negative in either shape
    /// - Neither shape present means no labour on the quote
    pub fn labour_lines(&self) -> Result<Vec<Element>, ValidationError> {
        if let Some(labour) = &self.labour {
            let mut lines = Vec::with_capacity(labour.len());
            for input in labour {
                if input.rate_id.trim().is_empty() {
                    return Err(ValidationError::Required {
                        field: "rateId".to_string(),
                    });
                }
                validate_labour_hours(input.hours)?;
                lines.push(Element::new(input.rate_id.clone(), input.hours));
            }
            return Ok(lines);
        }

        match (self.labour_hours, &self.labour_rate_id) {
            (None, None) => Ok(Vec::new()),
            (Some(hours), Some(rate_id)) => {
                if rate_id.trim().is_empty() {
                    return Err(ValidationError::Required {
                        field: "labourRateId".to_string(),
                    });
                }
                validate_labour_hours(hours)?;
                Ok(vec![Element::new(rate_id.clone(), hours)])
            }
            (Some(_), None) => Err(ValidationError::Required {
                field: "labourRateId".to_string(),
            }),
            (None, Some(_)) => Err(ValidationError::Required {
                field: "labourHours".to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{
            "elements": [
                { "assetId": "GUT-SC-MAR-3M", "quantity": 2 },
                { "assetId": "DP-65-3M", "quantity": 1, "lengthMillimeters": 2400 }
            ],
            "labourHours": 6.5,
            "labourRateId": "LAB-STD"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.elements.len(), 2);
        assert_eq!(request.elements[1].length_millimeters, Some(2400.0));

        let labour = request.labour_lines().unwrap();
        assert_eq!(labour.len(), 1);
        assert_eq!(labour[0].asset_id, "LAB-STD");
        assert_eq!(labour[0].quantity, 6.5);
    }

    #[test]
    fn test_labour_list_shape() {
        let json = r#"{
            "elements": [],
            "labour": [
                { "rateId": "LAB-STD", "hours": 4.0 },
                { "rateId": "LAB-APPR", "hours": 2.0 }
            ]
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        let labour = request.labour_lines().unwrap();
        assert_eq!(labour.len(), 2);
        assert_eq!(labour[1].asset_id, "LAB-APPR");
    }

    #[test]
    fn test_labour_list_wins_over_scalar_pair() {
        let request = QuoteRequest {
            elements: vec![],
            labour: Some(vec![LabourInput {
                rate_id: "LAB-STD".to_string(),
                hours: 4.0,
            }]),
            labour_hours: Some(99.0),
            labour_rate_id: Some("LAB-IGNORED".to_string()),
        };

        let labour = request.labour_lines().unwrap();
        assert_eq!(labour.len(), 1);
        assert_eq!(labour[0].asset_id, "LAB-STD");
        assert_eq!(labour[0].quantity, 4.0);
    }

    #[test]
    fn test_half_scalar_pair_is_rejected() {
        let request = QuoteRequest {
            labour_hours: Some(4.0),
            ..Default::default()
        };
        assert!(matches!(
            request.labour_lines(),
            Err(ValidationError::Required { field }) if field == "labourRateId"
        ));

        let request = QuoteRequest {
            labour_rate_id: Some("LAB-STD".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.labour_lines(),
            Err(ValidationError::Required { field }) if field == "labourHours"
        ));
    }

    #[test]
    fn test_no_labour_shapes_means_no_labour() {
        let request = QuoteRequest::default();
        assert!(request.labour_lines().unwrap().is_empty());
    }

    #[test]
    fn test_negative_hours_rejected_in_either_shape() {
        let request = QuoteRequest {
            labour_hours: Some(-1.0),
            labour_rate_id: Some("LAB-STD".to_string()),
            ..Default::default()
        };
        assert!(request.labour_lines().is_err());

        let request = QuoteRequest {
            labour: Some(vec![LabourInput {
                rate_id: "LAB-STD".to_string(),
                hours: -1.0,
            }]),
            ..Default::default()
        };
        assert!(request.labour_lines().is_err());
    }

    #[test]
    fn test_empty_rate_id_rejected() {
        let request = QuoteRequest {
            labour: Some(vec![LabourInput {
                rate_id: "  ".to_string(),
                hours: 1.0,
            }]),
            ..Default::default()
        };
        assert!(matches!(
            request.labour_lines(),
            Err(ValidationError::Required { field }) if field == "rateId"
        ));
    }
}
