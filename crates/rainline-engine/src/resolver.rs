//! # Pricing Resolver
//!
//! Turns a batch of catalog identifiers into a resolved pricing map.
//!
//! ## Resolution Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Resolution                                 │
//! │                                                                         │
//! │  ids: {GUT-SC-MAR-3M, BRK-SC-MAR, SCR-SS}                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ONE batch catalog read (case-insensitive match)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │ row found, cost present   → PriceInfo in the map                  │ │
//! │  │ row found, cost NULL      → omitted (warn) — a costless row      │ │
//! │  │                             can never price a line               │ │
//! │  │ no row / inactive row     → omitted (warn)                       │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HashMap keyed by the REQUESTED spelling, so the calculator's          │
//! │  lookups hit regardless of catalog casing                              │
//! │                                                                         │
//! │  Absence means "unpriceable": the calculator turns it into             │
//! │  UnpricedProduct. The resolver itself never errors on a miss.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use rainline_core::PriceInfo;
use rainline_db::{CatalogRepository, DbResult, PricingRow};

/// Default billing unit when the catalog row doesn't specify one.
const DEFAULT_UNIT: &str = "each";

/// Resolves catalog pricing for the quote pipeline.
///
/// One instance per request is fine; it only borrows the pooled repository.
#[derive(Debug, Clone)]
pub struct PricingResolver {
    catalog: CatalogRepository,
}

impl PricingResolver {
    /// Creates a resolver over the given catalog repository.
    pub fn new(catalog: CatalogRepository) -> Self {
        PricingResolver { catalog }
    }

    /// Resolves pricing for a batch of identifiers in one catalog read.
    ///
    /// The returned map is keyed by the identifiers exactly as supplied
    /// (the calculator looks lines up by their original spelling), while
    /// matching against the catalog is trimmed and case-insensitive.
    ///
    /// Identifiers that cannot price are omitted from the map, with a
    /// warning naming them; only an actual catalog failure is an error.
    pub async fn resolve(&self, ids: &[String]) -> DbResult<HashMap<String, PriceInfo>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let trimmed: Vec<String> = ids.iter().map(|id| id.trim().to_string()).collect();
        let rows = self.catalog.fetch_pricing(&trimmed).await?;

        let by_key: HashMap<String, PricingRow> = rows
            .into_iter()
            .map(|row| (row.id.to_ascii_uppercase(), row))
            .collect();

        let mut pricing = HashMap::with_capacity(ids.len());
        for id in ids {
            let key = id.trim().to_ascii_uppercase();
            let Some(row) = by_key.get(&key) else {
                warn!(id = %id, "No active catalog row for identifier");
                continue;
            };
            let Some(cost_cents) = row.cost_cents else {
                warn!(id = %id, "Catalog row has no cost, cannot price");
                continue;
            };

            pricing.insert(
                id.clone(),
                PriceInfo {
                    name: row.name.clone(),
                    cost_cents,
                    // Negative markup is below-cost pricing, carried as-is.
                    markup_bps: row.markup_bps as i32,
                    unit: row
                        .unit
                        .clone()
                        .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
                },
            );
        }

        debug!(
            requested = ids.len(),
            resolved = pricing.len(),
            "Pricing batch resolved"
        );

        Ok(pricing)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
