//! # rainline-core: Pure Quote Logic for Rainline
//!
//! This crate is the **heart** of Rainline, the guttering quote tool. It
//! contains the whole quote computation pipeline as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rainline Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Diagram Frontend (canvas)                       │   │
//! │  │    Place gutters / downpipes ──► Request quote ──► Quote UI    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              rainline-engine (QuoteService)                     │   │
//! │  │    validate ──► expand ──► resolve pricing ──► calculate       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rainline-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   asset   │  │  expand   │  │   money   │  │   quote   │  │   │
//! │  │   │ AssetRef  │  │ brackets  │  │   Money   │  │  PricedLn │  │   │
//! │  │   │ classify  │  │ clips/scr │  │  Markup   │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              rainline-db (Catalog Layer)                        │   │
//! │  │          SQLite product catalog, batch pricing reads            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`asset`] - Classification of catalog identifiers (gutter, downpipe, ...)
//! - [`expand`] - Accessory expansion: brackets, clips, screws
//! - [`money`] - Money and Markup types with integer arithmetic (no floats!)
//! - [`quote`] - Quote assembly from expanded lines + resolved pricing
//! - [`types`] - Domain types (Element, PricedLine, Quote, ...)
//! - [`validation`] - Element-level input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics;
//!    an unpriceable identifier is always a hard failure, never a $0.00 line
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use rainline_core::expand::expand_elements;
//! use rainline_core::quote::calculate_quote;
//! use rainline_core::types::{Element, PriceInfo};
//!
//! // One 3 m gutter expands to gutter + 8 brackets + 24 screws.
//! let expanded = expand_elements(&[Element::new("GUT-SC-MAR-3M", 1.0)]);
//! assert_eq!(expanded.len(), 3);
//!
//! let mut pricing = HashMap::new();
//! for (id, cost, markup) in [
//!     ("GUT-SC-MAR-3M", 1600, 2000),
//!     ("BRK-SC-MAR", 100, 5000),
//!     ("SCR-SS", 5, 10000),
//! ] {
//!     pricing.insert(id.to_string(), PriceInfo {
//!         name: id.to_string(),
//!         cost_cents: cost,
//!         markup_bps: markup,
//!         unit: "each".to_string(),
//!     });
//! }
//!
//! let quote = calculate_quote(&expanded, &[], &pricing).unwrap();
//! assert_eq!(quote.total_cents, quote.materials_subtotal_cents);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod asset;
pub mod error;
pub mod expand;
pub mod money;
pub mod quote;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rainline_core::Money` instead of
// `use rainline_core::money::Money`

pub use error::{QuoteError, QuoteResult, ValidationError};
pub use money::{Markup, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum elements allowed in a single quote request.
///
/// ## Business Reason
/// Bounds request size and expansion work; a residential guttering diagram
/// never legitimately approaches this.
pub const MAX_QUOTE_ELEMENTS: usize = 500;
