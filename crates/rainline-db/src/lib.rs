//! # Rainline Database Layer
//!
//! SQLite persistence for the Rainline product catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        rainline-db                                      │
//! │                                                                         │
//! │  ┌──────────────┐    ┌──────────────┐    ┌───────────────────────────┐ │
//! │  │   pool.rs    │    │ migrations.rs│    │  repository/catalog.rs    │ │
//! │  │              │    │              │    │                           │ │
//! │  │  Database    │───►│  Embedded    │    │  CatalogRepository        │ │
//! │  │  DbConfig    │    │  SQL files   │    │  - fetch_pricing (batch)  │ │
//! │  │  (WAL mode)  │    │              │    │  - insert / deactivate    │ │
//! │  └──────────────┘    └──────────────┘    └───────────────────────────┘ │
//! │                                                                         │
//! │  The quote pipeline reads the catalog exactly once per request;        │
//! │  all pricing logic lives in rainline-core, never in SQL.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use rainline_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./rainline.db")).await?;
//! let rows = db.catalog().fetch_pricing(&ids).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::{CatalogProduct, CatalogRepository, PricingRow};
