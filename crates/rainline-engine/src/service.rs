//! # Quote Service
//!
//! The pipeline entry point: one call takes a raw request to a priced quote.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    QuoteService::calculate_quote                        │
//! │                                                                         │
//! │  QuoteRequest                                                           │
//! │       │ 1. validate elements + normalize labour shapes                 │
//! │       ▼                                                                 │
//! │  expand_elements ── pure (rainline-core)                               │
//! │       │ 2. brackets, clips, screws inferred and merged                 │
//! │       ▼                                                                 │
//! │  union of material + labour identifiers                                │
//! │       │ 3. ONE batch catalog read (PricingResolver)                    │
//! │       ▼                                                                 │
//! │  calculate_quote ── pure (rainline-core)                               │
//! │       │ 4. per-line pricing, line-then-sum rounding                    │
//! │       ▼                                                                 │
//! │  Quote                                                                  │
//! │                                                                         │
//! │  Logs carry COUNTS only, never quote contents: a quote is a price      │
//! │  offer to a customer and stays out of the logs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use tracing::{debug, info};

use rainline_core::expand::expand_elements;
use rainline_core::quote;
use rainline_core::validation::validate_elements;
use rainline_core::Quote;
use rainline_db::Database;

use crate::error::ServiceResult;
use crate::request::QuoteRequest;
use crate::resolver::PricingResolver;

/// The quote pipeline service.
///
/// Cheap to clone; all clones share the underlying connection pool.
///
/// ## Usage
/// ```rust,ignore
/// let service = QuoteService::new(db);
/// let quote = service.calculate_quote(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct QuoteService {
    db: Database,
}

impl QuoteService {
    /// Creates a quote service over the given database.
    pub fn new(db: Database) -> Self {
        QuoteService { db }
    }

    /// Calculates a complete quote from a raw request.
    ///
    /// ## Steps
    /// 1. Validate the placed elements and normalize the labour shapes
    /// 2. Expand accessories (pure)
    /// 3. Resolve pricing for every identifier in ONE catalog read
    /// 4. Assemble the quote (pure)
    ///
    /// ## Errors
    /// * [`QuoteServiceError::InvalidInput`] - request failed validation
    /// * [`QuoteServiceError::UnpricedProduct`] - a line could not price
    /// * [`QuoteServiceError::CatalogUnavailable`] - the catalog read failed
    ///
    /// [`QuoteServiceError::InvalidInput`]: crate::error::QuoteServiceError::InvalidInput
    /// [`QuoteServiceError::UnpricedProduct`]: crate::error::QuoteServiceError::UnpricedProduct
    /// [`QuoteServiceError::CatalogUnavailable`]: crate::error::QuoteServiceError::CatalogUnavailable
    pub async fn calculate_quote(&self, request: &QuoteRequest) -> ServiceResult<Quote> {
        let elements = request.elements();
        validate_elements(&elements)?;
        let labour = request.labour_lines()?;

        debug!(
            elements = elements.len(),
            labour_lines = labour.len(),
            "Quote request accepted"
        );

        let expanded = expand_elements(&elements);

        // Union of every identifier the calculator will look up, gathered
        // before the single catalog read.
        let ids: BTreeSet<String> = expanded
            .iter()
            .map(|line| line.asset_id.clone())
            .chain(labour.iter().map(|line| line.asset_id.clone()))
            .collect();
        let ids: Vec<String> = ids.into_iter().collect();

        let resolver = PricingResolver::new(self.db.catalog());
        let pricing = resolver.resolve(&ids).await?;

        let quote = quote::calculate_quote(&expanded, &labour, &pricing)?;

        info!(
            elements = elements.len(),
            material_lines = quote.materials.len(),
            labour_lines = labour.len(),
            "Quote calculated"
        );

        Ok(quote)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
