//! # Domain Types
//!
//! Core domain types for the quote pipeline.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote Pipeline Types                             │
//! │                                                                         │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐   │
//! │  │    Element      │     │  ExpandedLine   │     │   PriceInfo     │   │
//! │  │  ─────────────  │     │  ─────────────  │     │  ─────────────  │   │
//! │  │  asset_id       │ ──► │  asset_id       │     │  name           │   │
//! │  │  quantity       │     │  quantity       │     │  cost_price     │   │
//! │  │  length_mm?     │     │  (merged)       │     │  markup (bps)   │   │
//! │  └─────────────────┘     └────────┬────────┘     └────────┬────────┘   │
//! │       user placed           after expansion          from catalog      │
//! │                                   │                       │            │
//! │                                   └─────────┬─────────────┘            │
//! │                                             ▼                          │
//! │                          ┌─────────────────┐   ┌─────────────────┐    │
//! │                          │   PricedLine    │──►│     Quote       │    │
//! │                          │  sell, total    │   │  subtotals,     │    │
//! │                          │  (cents)        │   │  labour, total  │    │
//! │                          └─────────────────┘   └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All entities here are ephemeral: constructed and consumed within a single
//! quote computation, never persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Markup, Money};

// =============================================================================
// Element
// =============================================================================

/// A user-placed construction element (or labour line) entering the pipeline.
///
/// `quantity` counts whole pieces, except when `length_mm` is supplied for a
/// linear item, in which case the measured length overrides stock-length
/// arithmetic. For labour lines, `quantity` carries hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Element {
    /// Catalog identifier, e.g. "GUT-SC-MAR-3M". Structure is meaningful;
    /// see [`crate::asset::AssetRef`].
    pub asset_id: String,

    /// Piece count (or hours for labour lines). Must not be negative;
    /// zero-quantity elements are ignored by expansion.
    pub quantity: f64,

    /// Manually measured length in millimetres, when the user overrode the
    /// stock-length assumption on the diagram.
    pub length_mm: Option<f64>,
}

impl Element {
    /// Creates an element with no measured length.
    pub fn new(asset_id: impl Into<String>, quantity: f64) -> Self {
        Element {
            asset_id: asset_id.into(),
            quantity,
            length_mm: None,
        }
    }

    /// Creates an element with a measured length in millimetres.
    pub fn with_length(asset_id: impl Into<String>, quantity: f64, length_mm: f64) -> Self {
        Element {
            asset_id: asset_id.into(),
            quantity,
            length_mm: Some(length_mm),
        }
    }
}

// =============================================================================
// Expanded Line
// =============================================================================

/// One line of the expanded bill of materials.
///
/// ## Invariants
/// - `quantity` is always > 0 (zero-or-negative entries are dropped)
/// - Each `asset_id` appears at most once (quantities are merged)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpandedLine {
    pub asset_id: String,
    pub quantity: f64,
}

// =============================================================================
// Price Info
// =============================================================================

/// Resolved pricing for one catalog identifier.
///
/// Produced by the Pricing Resolver from a catalog row. An identifier with
/// no catalog row, or a row without a usable cost, never becomes a
/// PriceInfo; absence means "unpriceable", not "free".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceInfo {
    /// Display name from the catalog.
    pub name: String,

    /// Cost price in cents.
    pub cost_cents: i64,

    /// Markup in basis points (2500 = 25%; negative sells below cost).
    pub markup_bps: i32,

    /// Billing unit ("each", "metre", "hour"). Defaults to "each".
    pub unit: String,
}

impl PriceInfo {
    /// Returns the cost price as Money.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Returns the markup.
    #[inline]
    pub fn markup(&self) -> Markup {
        Markup::from_bps(self.markup_bps)
    }

    /// Computes the sell price per unit: cost plus markup, rounded to the
    /// cent.
    #[inline]
    pub fn sell_price(&self) -> Money {
        self.cost_price().with_markup(self.markup())
    }
}

// =============================================================================
// Priced Line
// =============================================================================

/// A fully priced material line on the quote.
///
/// Pricing data is frozen into the line at calculation time so the quote
/// stays auditable even if the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricedLine {
    /// Catalog identifier.
    pub id: String,

    /// Display name at time of quoting (frozen).
    pub name: String,

    /// Quantity on this line.
    pub quantity: f64,

    /// Cost price per unit in cents (frozen).
    pub cost_price_cents: i64,

    /// Markup in basis points (frozen).
    pub markup_bps: i32,

    /// Sell price per unit in cents: round(cost × (1 + markup)).
    pub sell_price_cents: i64,

    /// Line total in cents: round(sell_price × quantity).
    pub line_total_cents: i64,
}

impl PricedLine {
    /// Returns the sell price as Money.
    #[inline]
    pub fn sell_price(&self) -> Money {
        Money::from_cents(self.sell_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }

    /// Returns the markup as a display percentage.
    #[inline]
    pub fn markup_percentage(&self) -> f64 {
        Markup::from_bps(self.markup_bps).percentage()
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A complete priced quote: materials plus labour.
///
/// ## Invariants
/// - `materials_subtotal_cents` equals the sum of the (already rounded)
///   material line totals; rounding happens at the line level, never on
///   the sum
/// - `total_cents = materials_subtotal_cents + labour_subtotal_cents`
/// - Every material line was resolved by the Pricing Resolver; a quote is
///   never partially priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    /// Expanded, priced bill of materials.
    pub materials: Vec<PricedLine>,

    /// Sum of material line totals in cents.
    pub materials_subtotal_cents: i64,

    /// Total labour hours across all labour lines.
    pub labour_hours: f64,

    /// Displayed hourly rate in cents: the sell price of the first labour
    /// line. Labour lines are expected to share a uniform rate in practice,
    /// but the calculator does not enforce uniformity.
    pub labour_rate_cents: i64,

    /// Sum of labour line totals in cents.
    pub labour_subtotal_cents: i64,

    /// Grand total in cents.
    pub total_cents: i64,
}

impl Quote {
    /// Returns the materials subtotal as Money.
    #[inline]
    pub fn materials_subtotal(&self) -> Money {
        Money::from_cents(self.materials_subtotal_cents)
    }

    /// Returns the labour subtotal as Money.
    #[inline]
    pub fn labour_subtotal(&self) -> Money {
        Money::from_cents(self.labour_subtotal_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_constructors() {
        let e = Element::new("GUT-SC-MAR-3M", 2.0);
        assert_eq!(e.asset_id, "GUT-SC-MAR-3M");
        assert_eq!(e.quantity, 2.0);
        assert!(e.length_mm.is_none());

        let e = Element::with_length("GUT-SC-MAR-3M", 1.0, 4200.0);
        assert_eq!(e.length_mm, Some(4200.0));
    }

    #[test]
    fn test_price_info_sell_price() {
        let info = PriceInfo {
            name: "Stainless Screw".to_string(),
            cost_cents: 5,
            markup_bps: 10000,
            unit: "each".to_string(),
        };
        assert_eq!(info.sell_price().cents(), 10);
    }

    #[test]
    fn test_priced_line_accessors() {
        let line = PricedLine {
            id: "SCR-SS".to_string(),
            name: "Stainless Screw".to_string(),
            quantity: 24.0,
            cost_price_cents: 5,
            markup_bps: 10000,
            sell_price_cents: 10,
            line_total_cents: 240,
        };
        assert_eq!(line.sell_price().cents(), 10);
        assert_eq!(line.line_total().cents(), 240);
        assert!((line.markup_percentage() - 100.0).abs() < 0.001);
    }
}
