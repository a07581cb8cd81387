//! # Quote Response DTOs
//!
//! The JSON shape the diagram frontend renders. Field names are camelCase
//! at this boundary; the core types stay snake_case Rust.

use serde::{Deserialize, Serialize};

use rainline_core::{PricedLine, Quote};

/// One priced material line as the frontend renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineResponse {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub cost_price_cents: i64,
    pub markup_bps: i32,
    pub sell_price_cents: i64,
    pub line_total_cents: i64,
}

impl From<PricedLine> for QuoteLineResponse {
    fn from(line: PricedLine) -> Self {
        QuoteLineResponse {
            id: line.id,
            name: line.name,
            quantity: line.quantity,
            cost_price_cents: line.cost_price_cents,
            markup_bps: line.markup_bps,
            sell_price_cents: line.sell_price_cents,
            line_total_cents: line.line_total_cents,
        }
    }
}

/// The full quote response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub materials: Vec<QuoteLineResponse>,
    pub materials_subtotal_cents: i64,
    pub labour_hours: f64,
    pub labour_rate_cents: i64,
    pub labour_subtotal_cents: i64,
    pub total_cents: i64,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse {
            materials: quote.materials.into_iter().map(Into::into).collect(),
            materials_subtotal_cents: quote.materials_subtotal_cents,
            labour_hours: quote.labour_hours,
            labour_rate_cents: quote.labour_rate_cents,
            labour_subtotal_cents: quote.labour_subtotal_cents,
            total_cents: quote.total_cents,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
