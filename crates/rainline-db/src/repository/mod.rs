//! # Repositories
//!
//! Repository implementations for catalog access.
//!
//! The quote pipeline only ever needs one repository: the product catalog.
//! It is read-only from the pipeline's perspective; writes come from the
//! seed tool and the (out-of-scope) import surface.

pub mod catalog;

pub use catalog::{CatalogProduct, CatalogRepository, PricingRow};
