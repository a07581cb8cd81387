//! # Quote Calculator
//!
//! Assembles a priced quote from the expanded bill of materials, the labour
//! lines, and a resolved pricing map.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote Assembly                                   │
//! │                                                                         │
//! │  ExpandedLine[]              Element[] (labour)                        │
//! │       │                           │                                    │
//! │       ▼                           ▼                                    │
//! │  for each material:          for each labour line:                     │
//! │    price? ──no──► Error        price? ──no──► Error                    │
//! │    sell  = cost + markup       rate = cost + markup                    │
//! │    total = sell × qty          total = rate × hours                    │
//! │       │                           │                                    │
//! │       ▼                           ▼                                    │
//! │  materials_subtotal          labour_subtotal, labour_hours             │
//! │       └───────────┬───────────────┘                                    │
//! │                   ▼                                                    │
//! │            total = materials_subtotal + labour_subtotal                │
//! │                                                                         │
//! │  ALL-OR-NOTHING: any unpriced identifier aborts the whole quote.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This function is pure: the single catalog read happened upstream, in the
//! Pricing Resolver. Rounding is per line, at the cent; subtotals sum
//! already-rounded cents (see [`crate::money`]).

use std::collections::HashMap;

use crate::error::{QuoteError, QuoteResult};
use crate::money::Money;
use crate::types::{Element, ExpandedLine, PriceInfo, PricedLine, Quote};

/// Prices one expanded line against the resolved pricing map.
///
/// Fails with [`QuoteError::UnpricedProduct`] naming the identifier when the
/// map has no entry for it. Absence is never substituted with a zero price.
fn price_line(
    asset_id: &str,
    quantity: f64,
    pricing: &HashMap<String, PriceInfo>,
) -> QuoteResult<PricedLine> {
    let info = pricing
        .get(asset_id)
        .ok_or_else(|| QuoteError::UnpricedProduct(asset_id.to_string()))?;

    let sell_price = info.sell_price();
    let line_total = sell_price.times_quantity(quantity);

    Ok(PricedLine {
        id: asset_id.to_string(),
        name: info.name.clone(),
        quantity,
        cost_price_cents: info.cost_cents,
        markup_bps: info.markup_bps,
        sell_price_cents: sell_price.cents(),
        line_total_cents: line_total.cents(),
    })
}

/// Calculates a complete quote.
///
/// ## Arguments
/// * `materials` - the expanded bill of materials (from
///   [`crate::expand::expand_elements`])
/// * `labour` - labour lines: identifier plus hours in `quantity`
/// * `pricing` - resolved pricing for every identifier that may appear;
///   produced by one batch catalog fetch upstream
///
/// ## Behavior
/// - Every material and labour identifier must resolve; the first miss
///   aborts with [`QuoteError::UnpricedProduct`] and no quote is returned
/// - The displayed labour rate is the sell price of the first labour line;
///   uniformity across labour lines is expected but not enforced
/// - Labour lines with zero hours contribute nothing but must still price
///   (a quote against an unknown rate is a request error, not $0 labour)
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use rainline_core::quote::calculate_quote;
/// use rainline_core::types::{Element, ExpandedLine, PriceInfo};
///
/// let materials = vec![ExpandedLine { asset_id: "SCR-SS".into(), quantity: 24.0 }];
/// let labour = vec![Element::new("LAB-STD", 2.0)];
///
/// let mut pricing = HashMap::new();
/// pricing.insert("SCR-SS".to_string(), PriceInfo {
///     name: "Stainless Screw".into(), cost_cents: 5, markup_bps: 10000, unit: "each".into(),
/// });
/// pricing.insert("LAB-STD".to_string(), PriceInfo {
///     name: "Standard Labour".into(), cost_cents: 8000, markup_bps: 2500, unit: "hour".into(),
/// });
///
/// let quote = calculate_quote(&materials, &labour, &pricing).unwrap();
/// assert_eq!(quote.materials_subtotal_cents, 240);   // 24 × $0.10
/// assert_eq!(quote.labour_rate_cents, 10000);        // $80 + 25%
/// assert_eq!(quote.total_cents, 240 + 20000);
/// ```
pub fn calculate_quote(
    materials: &[ExpandedLine],
    labour: &[Element],
    pricing: &HashMap<String, PriceInfo>,
) -> QuoteResult<Quote> {
    // Materials: price every expanded line, summing rounded line totals.
    let mut priced_materials = Vec::with_capacity(materials.len());
    let mut materials_subtotal = Money::zero();

    for line in materials {
        let priced = price_line(&line.asset_id, line.quantity, pricing)?;
        materials_subtotal += priced.line_total();
        priced_materials.push(priced);
    }

    // Labour: hours ride in the quantity field; the displayed rate is the
    // first line's sell price.
    let mut labour_hours = 0.0_f64;
    let mut labour_subtotal = Money::zero();
    let mut labour_rate = Money::zero();

    for (index, labour_line) in labour.iter().enumerate() {
        let priced = price_line(&labour_line.asset_id, labour_line.quantity, pricing)?;
        if index == 0 {
            labour_rate = priced.sell_price();
        }
        labour_hours += labour_line.quantity;
        labour_subtotal += priced.line_total();
    }

    let total = materials_subtotal + labour_subtotal;

    Ok(Quote {
        materials: priced_materials,
        materials_subtotal_cents: materials_subtotal.cents(),
        labour_hours,
        labour_rate_cents: labour_rate.cents(),
        labour_subtotal_cents: labour_subtotal.cents(),
        total_cents: total.cents(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand_elements;

    fn info(name: &str, cost_cents: i64, markup_bps: i32) -> PriceInfo {
        PriceInfo {
            name: name.to_string(),
            cost_cents,
            markup_bps,
            unit: "each".to_string(),
        }
    }

    fn pricing_of(entries: &[(&str, i64, i32)]) -> HashMap<String, PriceInfo> {
        entries
            .iter()
            .map(|(id, cost, markup)| (id.to_string(), info(id, *cost, *markup)))
            .collect()
    }

    #[test]
    fn test_pricing_round_trip() {
        // cost $10.00, markup 25% => sell $12.50; qty 3 => line total $37.50
        let materials = vec![ExpandedLine {
            asset_id: "STOP-END-SC".to_string(),
            quantity: 3.0,
        }];
        let pricing = pricing_of(&[("STOP-END-SC", 1000, 2500)]);

        let quote = calculate_quote(&materials, &[], &pricing).unwrap();
        assert_eq!(quote.materials[0].sell_price_cents, 1250);
        assert_eq!(quote.materials[0].line_total_cents, 3750);
        assert_eq!(quote.materials_subtotal_cents, 3750);
        assert_eq!(quote.total_cents, 3750);
    }

    #[test]
    fn test_end_to_end_gutter_scenario() {
        // Two 1.5 m Classic gutters: 3000 mm => 8 brackets, 24 screws.
        let expanded = expand_elements(&[Element::new("GUT-CL-MAR-1.5M", 2.0)]);
        let pricing = pricing_of(&[
            ("GUT-CL-MAR-1.5M", 800, 2000), // $8.00 + 20% = $9.60
            ("BRK-CL-MAR", 100, 5000),      // $1.00 + 50% = $1.50
            ("SCR-SS", 5, 10000),           // $0.05 + 100% = $0.10
        ]);

        let quote = calculate_quote(&expanded, &[], &pricing).unwrap();
        assert_eq!(quote.materials.len(), 3);

        let by_id = |id: &str| {
            quote
                .materials
                .iter()
                .find(|l| l.id == id)
                .expect("line missing")
        };
        assert_eq!(by_id("GUT-CL-MAR-1.5M").line_total_cents, 1920); // 9.60 × 2
        assert_eq!(by_id("BRK-CL-MAR").line_total_cents, 1200); // 1.50 × 8
        assert_eq!(by_id("SCR-SS").line_total_cents, 240); // 0.10 × 24

        // Subtotal is the sum of the individually rounded line totals.
        let sum: i64 = quote.materials.iter().map(|l| l.line_total_cents).sum();
        assert_eq!(quote.materials_subtotal_cents, sum);
        assert_eq!(quote.materials_subtotal_cents, 3360);
        assert_eq!(quote.total_cents, 3360);
    }

    #[test]
    fn test_unpriced_material_aborts_with_identifier() {
        let expanded = expand_elements(&[Element::new("GUT-SC-MAR-3M", 1.0)]);
        // Gutter and screws priced, bracket missing.
        let pricing = pricing_of(&[("GUT-SC-MAR-3M", 800, 2000), ("SCR-SS", 5, 10000)]);

        let err = calculate_quote(&expanded, &[], &pricing).unwrap_err();
        match err {
            QuoteError::UnpricedProduct(id) => assert_eq!(id, "BRK-SC-MAR"),
            other => panic!("expected UnpricedProduct, got {other:?}"),
        }
    }

    #[test]
    fn test_unpriced_labour_aborts_with_identifier() {
        let pricing = pricing_of(&[]);
        let labour = vec![Element::new("LAB-STD", 3.0)];

        let err = calculate_quote(&[], &labour, &pricing).unwrap_err();
        assert!(matches!(err, QuoteError::UnpricedProduct(id) if id == "LAB-STD"));
    }

    #[test]
    fn test_labour_aggregation() {
        let pricing = pricing_of(&[("LAB-STD", 8000, 2500), ("LAB-APPR", 4000, 2500)]);
        let labour = vec![
            Element::new("LAB-STD", 2.0),
            Element::new("LAB-APPR", 1.5),
        ];

        let quote = calculate_quote(&[], &labour, &pricing).unwrap();
        assert_eq!(quote.labour_hours, 3.5);
        // Rate displayed from the FIRST labour line: $80 + 25% = $100
        assert_eq!(quote.labour_rate_cents, 10000);
        // 2 × $100.00 + 1.5 × $50.00 = $275.00
        assert_eq!(quote.labour_subtotal_cents, 27500);
        assert_eq!(quote.total_cents, 27500);
    }

    #[test]
    fn test_no_labour_lines() {
        let materials = vec![ExpandedLine {
            asset_id: "SCR-SS".to_string(),
            quantity: 10.0,
        }];
        let pricing = pricing_of(&[("SCR-SS", 5, 10000)]);

        let quote = calculate_quote(&materials, &[], &pricing).unwrap();
        assert_eq!(quote.labour_hours, 0.0);
        assert_eq!(quote.labour_rate_cents, 0);
        assert_eq!(quote.labour_subtotal_cents, 0);
        assert_eq!(quote.total_cents, quote.materials_subtotal_cents);
    }

    #[test]
    fn test_zero_hour_labour_still_requires_pricing() {
        let labour = vec![Element::new("LAB-STD", 0.0)];
        let err = calculate_quote(&[], &labour, &pricing_of(&[])).unwrap_err();
        assert!(matches!(err, QuoteError::UnpricedProduct(_)));

        let pricing = pricing_of(&[("LAB-STD", 8000, 2500)]);
        let quote = calculate_quote(&[], &labour, &pricing).unwrap();
        assert_eq!(quote.labour_hours, 0.0);
        assert_eq!(quote.labour_rate_cents, 10000);
        assert_eq!(quote.labour_subtotal_cents, 0);
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let materials = vec![ExpandedLine {
            asset_id: "DROPPER".to_string(),
            quantity: 2.0,
        }];
        let labour = vec![Element::new("LAB-STD", 1.0)];
        let pricing = pricing_of(&[("DROPPER", 350, 4000), ("LAB-STD", 8000, 2500)]);

        let quote = calculate_quote(&materials, &labour, &pricing).unwrap();
        assert_eq!(
            quote.total_cents,
            quote.materials_subtotal_cents + quote.labour_subtotal_cents
        );
    }
}
