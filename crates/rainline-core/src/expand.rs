//! # Accessory Expansion Engine
//!
//! Expands a sparse list of user-placed elements into the complete bill of
//! materials by inferring the fasteners, brackets, and clips the trade rules
//! require.
//!
//! ## Domain Rules (billing)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Accessory Inference                                │
//! │                                                                         │
//! │  Gutter (GUT-{SC|CL}-MAR-{len}M)                                       │
//! │    total mm = measured length, else stock length × 1000 × qty          │
//! │    brackets = 1 + floor(total mm / 400)     (min 1 for any run)        │
//! │    screws  += brackets × 3                                             │
//! │    emits: gutter, BRK-{profile}-MAR, screws                            │
//! │                                                                         │
//! │  Downpipe (DP-*, DPJ-*)                                                │
//! │    clip family: adjustable if ANY ACL-* in the batch, else saddle      │
//! │    clips = max(1, ceil(measured mm / 1200)), else one per unit         │
//! │    screws += clips × 2                                                 │
//! │    emits: downpipe, {SCL|ACL}-{size}, screws                           │
//! │                                                                         │
//! │  Dropper (DROPPER, DRP-*)       screws += 4 × qty                      │
//! │  Saddle clip (SCL-*)            screws += 2 × qty                      │
//! │  Adjustable clip (ACL-*)        screws += 2 × qty                      │
//! │  Anything else                  passes through unchanged               │
//! │                                                                         │
//! │  Screws accumulate across ALL rules and flush as one SCR-SS line.      │
//! │  Lines merge by identifier; zero-or-negative quantities are dropped.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! Expansion is a pure function and order-independent, with one deliberate
//! exception: the clip family is a batch-wide decision. It is resolved by
//! scanning the whole input into a [`BatchContext`] before any downpipe rule
//! runs, so a trailing `ACL-65` on the diagram still switches every downpipe
//! in the batch to adjustable clips.

use std::collections::BTreeMap;

use crate::asset::{AssetRef, ClipSize};
use crate::types::{Element, ExpandedLine};

// =============================================================================
// Rule Constants
// =============================================================================

/// One bracket at 0 mm, then one more per full 400 mm of gutter run.
pub const BRACKET_SPACING_MM: f64 = 400.0;

/// Every bracket is fixed with 3 stainless steel screws.
pub const SCREWS_PER_BRACKET: f64 = 3.0;

/// Every dropper is fixed with 4 stainless steel screws.
pub const SCREWS_PER_DROPPER: f64 = 4.0;

/// Every clip (saddle or adjustable) is fixed with 2 stainless steel screws.
pub const SCREWS_PER_CLIP: f64 = 2.0;

/// One downpipe clip per 1.2 m of measured downpipe run.
pub const DOWNPIPE_CLIP_SPACING_MM: f64 = 1200.0;

/// The shared stainless steel screw line all rules accumulate into.
pub const SCREW_ASSET_ID: &str = "SCR-SS";

// =============================================================================
// Batch Context
// =============================================================================

/// Which clip family downpipes in this batch receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipFamily {
    /// Saddle clips (SCL-{size}), the default.
    Saddle,
    /// Adjustable clips (ACL-{size}), used when any adjustable clip is
    /// already placed on the diagram.
    Adjustable,
}

impl ClipFamily {
    /// Returns the clip identifier for a downpipe of the given size.
    pub fn clip_asset_id(&self, size: ClipSize) -> String {
        match self {
            ClipFamily::Saddle => format!("SCL-{}", size.token()),
            ClipFamily::Adjustable => format!("ACL-{}", size.token()),
        }
    }
}

/// Batch-wide facts resolved before any per-element rule runs.
///
/// The original dispatch computed the clip family as an implicit flag
/// mid-loop; making it an explicit value threaded into the downpipe rule
/// keeps expansion order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchContext {
    /// Clip family for every downpipe in the batch.
    pub clip_family: ClipFamily,
}

impl BatchContext {
    /// Scans the entire input batch and resolves the clip family.
    ///
    /// If ANY element classifies as an adjustable clip, all downpipes get
    /// adjustable clips; otherwise saddle clips.
    pub fn scan(elements: &[Element]) -> Self {
        let has_adjustable = elements
            .iter()
            .any(|e| AssetRef::classify(&e.asset_id).is_adjustable_clip());

        BatchContext {
            clip_family: if has_adjustable {
                ClipFamily::Adjustable
            } else {
                ClipFamily::Saddle
            },
        }
    }
}

// =============================================================================
// Expansion
// =============================================================================

/// Expands user-placed elements into the complete bill of materials.
///
/// Elements with `quantity <= 0` are ignored. Inferred accessory quantities
/// merge with manually placed items (summed by identifier), and any entry
/// that ends up zero-or-negative is dropped. Lines come back ordered by
/// identifier for deterministic output.
///
/// ## Example
/// ```rust
/// use rainline_core::expand::expand_elements;
/// use rainline_core::types::Element;
///
/// // One 3 m Storm Cloud gutter: 3000 mm run
/// let expanded = expand_elements(&[Element::new("GUT-SC-MAR-3M", 1.0)]);
///
/// // brackets = 1 + floor(3000 / 400) = 8, screws = 8 × 3 = 24
/// let brackets = expanded.iter().find(|l| l.asset_id == "BRK-SC-MAR").unwrap();
/// assert_eq!(brackets.quantity, 8.0);
/// let screws = expanded.iter().find(|l| l.asset_id == "SCR-SS").unwrap();
/// assert_eq!(screws.quantity, 24.0);
/// ```
pub fn expand_elements(elements: &[Element]) -> Vec<ExpandedLine> {
    let ctx = BatchContext::scan(elements);

    // BTreeMap keeps output order deterministic across runs.
    let mut merged: BTreeMap<String, f64> = BTreeMap::new();
    let mut screws = 0.0_f64;

    for element in elements {
        if element.quantity <= 0.0 {
            continue;
        }
        // A measured length that is not a finite number is treated as absent.
        let length_mm = element.length_mm.filter(|l| l.is_finite());

        match AssetRef::classify(&element.asset_id) {
            AssetRef::Gutter {
                profile,
                stock_length_m,
            } => {
                // Manual measured length wins when supplied (>= 0);
                // else stock length × quantity.
                let total_mm = match length_mm {
                    Some(l) if l >= 0.0 => l,
                    _ => stock_length_m * 1000.0 * element.quantity,
                };
                let brackets = 1.0 + (total_mm / BRACKET_SPACING_MM).floor();

                add(&mut merged, &element.asset_id, element.quantity);
                add(&mut merged, &profile.bracket_asset_id(), brackets);
                screws += brackets * SCREWS_PER_BRACKET;
            }

            AssetRef::Downpipe { size } => {
                add(&mut merged, &element.asset_id, element.quantity);

                let clip_id = ctx.clip_family.clip_asset_id(size);
                let clips = match length_mm {
                    // Measured run: one clip per 1.2 m, never fewer than one.
                    Some(l) if l > 0.0 => (l / DOWNPIPE_CLIP_SPACING_MM).ceil().max(1.0),
                    // No measured length: floor assumption of one clip per
                    // downpipe unit.
                    _ => element.quantity,
                };

                add(&mut merged, &clip_id, clips);
                screws += clips * SCREWS_PER_CLIP;
            }

            AssetRef::Dropper => {
                add(&mut merged, &element.asset_id, element.quantity);
                screws += SCREWS_PER_DROPPER * element.quantity;
            }

            AssetRef::SaddleClip { .. } | AssetRef::AdjustableClip { .. } => {
                add(&mut merged, &element.asset_id, element.quantity);
                screws += SCREWS_PER_CLIP * element.quantity;
            }

            AssetRef::Other => {
                add(&mut merged, &element.asset_id, element.quantity);
            }
        }
    }

    // Flush the shared screw accumulator as a single line.
    if screws > 0.0 {
        add(&mut merged, SCREW_ASSET_ID, screws);
    }

    merged
        .into_iter()
        .filter(|(_, qty)| *qty > 0.0)
        .map(|(asset_id, quantity)| ExpandedLine { asset_id, quantity })
        .collect()
}

fn add(merged: &mut BTreeMap<String, f64>, asset_id: &str, quantity: f64) {
    *merged.entry(asset_id.to_string()).or_insert(0.0) += quantity;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line<'a>(expanded: &'a [ExpandedLine], id: &str) -> Option<&'a ExpandedLine> {
        expanded.iter().find(|l| l.asset_id == id)
    }

    fn qty(expanded: &[ExpandedLine], id: &str) -> f64 {
        line(expanded, id).map(|l| l.quantity).unwrap_or(0.0)
    }

    #[test]
    fn test_gutter_bracket_formula() {
        // GUT-SC-MAR-3M × 1 => 3000 mm => brackets = 1 + floor(3000/400) = 8
        let expanded = expand_elements(&[Element::new("GUT-SC-MAR-3M", 1.0)]);

        assert_eq!(qty(&expanded, "GUT-SC-MAR-3M"), 1.0);
        assert_eq!(qty(&expanded, "BRK-SC-MAR"), 8.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 24.0);
        assert_eq!(expanded.len(), 3);
    }

    #[test]
    fn test_gutter_stock_length_scales_with_quantity() {
        // GUT-CL-MAR-1.5M × 2 => 3000 mm total => 8 brackets, 24 screws
        let expanded = expand_elements(&[Element::new("GUT-CL-MAR-1.5M", 2.0)]);

        assert_eq!(qty(&expanded, "GUT-CL-MAR-1.5M"), 2.0);
        assert_eq!(qty(&expanded, "BRK-CL-MAR"), 8.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 24.0);
    }

    #[test]
    fn test_gutter_manual_length_overrides_stock() {
        // Measured 1000 mm wins over stock 3 m × qty 2 (6000 mm)
        let expanded = expand_elements(&[Element::with_length("GUT-SC-MAR-3M", 2.0, 1000.0)]);

        // brackets = 1 + floor(1000/400) = 3
        assert_eq!(qty(&expanded, "BRK-SC-MAR"), 3.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 9.0);
        // Original gutter quantity still emitted as placed
        assert_eq!(qty(&expanded, "GUT-SC-MAR-3M"), 2.0);
    }

    #[test]
    fn test_gutter_zero_measured_length_still_gets_one_bracket() {
        let expanded = expand_elements(&[Element::with_length("GUT-SC-MAR-3M", 1.0, 0.0)]);
        assert_eq!(qty(&expanded, "BRK-SC-MAR"), 1.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 3.0);
    }

    #[test]
    fn test_gutter_negative_measured_length_falls_back_to_stock() {
        let expanded = expand_elements(&[Element::with_length("GUT-SC-MAR-3M", 1.0, -50.0)]);
        // Fallback: 3000 mm => 8 brackets
        assert_eq!(qty(&expanded, "BRK-SC-MAR"), 8.0);
    }

    #[test]
    fn test_downpipe_default_one_clip_per_unit() {
        let expanded = expand_elements(&[Element::new("DP-65-3M", 3.0)]);

        assert_eq!(qty(&expanded, "DP-65-3M"), 3.0);
        assert_eq!(qty(&expanded, "SCL-65"), 3.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 6.0);
    }

    #[test]
    fn test_downpipe_measured_length_clip_count() {
        // 3000 mm / 1200 mm => ceil(2.5) = 3 clips
        let expanded = expand_elements(&[Element::with_length("DP-80-3M", 1.0, 3000.0)]);

        assert_eq!(qty(&expanded, "SCL-80"), 3.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 6.0);
    }

    #[test]
    fn test_downpipe_short_measured_length_gets_at_least_one_clip() {
        let expanded = expand_elements(&[Element::with_length("DP-65", 1.0, 100.0)]);
        assert_eq!(qty(&expanded, "SCL-65"), 1.0);
    }

    #[test]
    fn test_adjustable_clip_decision_is_batch_wide() {
        // The ACL-65 comes AFTER the downpipe in input order, and is an
        // 80 mm downpipe besides; every downpipe still switches family.
        let expanded = expand_elements(&[
            Element::new("DP-80-3M", 1.0),
            Element::new("DP-65-3M", 2.0),
            Element::new("ACL-65", 1.0),
        ]);

        assert_eq!(qty(&expanded, "ACL-80"), 1.0);
        // Inferred ACL-65 clips (2) merge with the placed one (1)
        assert_eq!(qty(&expanded, "ACL-65"), 3.0);
        assert!(line(&expanded, "SCL-80").is_none());
        assert!(line(&expanded, "SCL-65").is_none());
        // Screws: placed clip 2 + downpipe clips (1 + 2) × 2 = 8
        assert_eq!(qty(&expanded, "SCR-SS"), 8.0);
    }

    #[test]
    fn test_dropper_screws() {
        let expanded = expand_elements(&[Element::new("DROPPER", 2.0)]);
        assert_eq!(qty(&expanded, "DROPPER"), 2.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 8.0);
    }

    #[test]
    fn test_standalone_clips_add_screws() {
        let expanded = expand_elements(&[
            Element::new("SCL-65", 2.0),
            Element::new("ACL-80", 1.0),
        ]);
        assert_eq!(qty(&expanded, "SCL-65"), 2.0);
        assert_eq!(qty(&expanded, "ACL-80"), 1.0);
        assert_eq!(qty(&expanded, "SCR-SS"), 6.0);
    }

    #[test]
    fn test_unrecognized_passes_through() {
        let expanded = expand_elements(&[Element::new("STOP-END-SC", 4.0)]);
        assert_eq!(
            expanded,
            vec![ExpandedLine {
                asset_id: "STOP-END-SC".to_string(),
                quantity: 4.0
            }]
        );
    }

    #[test]
    fn test_zero_and_negative_quantities_ignored() {
        let expanded = expand_elements(&[
            Element::new("GUT-SC-MAR-3M", 0.0),
            Element::new("DROPPER", -1.0),
        ]);
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_merging_law() {
        // Expanding [A, A] equals expanding [A × 2] for a non-interacting
        // element (no batch-wide side effects involved).
        let twice = expand_elements(&[
            Element::new("GUT-SC-MAR-3M", 1.0),
            Element::new("GUT-SC-MAR-3M", 1.0),
        ]);
        let doubled = expand_elements(&[Element::new("GUT-SC-MAR-3M", 2.0)]);
        assert_eq!(twice, doubled);
    }

    #[test]
    fn test_inferred_accessories_are_a_fixed_point() {
        // Brackets and screws are not themselves gutters or downpipes, so
        // the accessory lines a gutter produces pass through a second
        // expansion unchanged.
        let first = expand_elements(&[Element::new("GUT-SC-MAR-3M", 1.0)]);

        let accessories: Vec<Element> = first
            .iter()
            .filter(|l| l.asset_id != "GUT-SC-MAR-3M")
            .map(|l| Element::new(l.asset_id.clone(), l.quantity))
            .collect();
        let second = expand_elements(&accessories);

        let expected: Vec<ExpandedLine> = first
            .into_iter()
            .filter(|l| l.asset_id != "GUT-SC-MAR-3M")
            .collect();
        assert_eq!(second, expected);
    }

    #[test]
    fn test_screw_accumulator_merges_with_placed_screws() {
        let expanded = expand_elements(&[
            Element::new("SCR-SS", 10.0),
            Element::new("DROPPER", 1.0),
        ]);
        // 10 placed + 4 inferred
        assert_eq!(qty(&expanded, "SCR-SS"), 14.0);
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(expand_elements(&[]).is_empty());
    }
}
