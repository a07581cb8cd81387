//! # Rainline Engine
//!
//! The quote pipeline entry point for Rainline.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        rainline-engine                                  │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                │
//! │  │  request.rs  │   │ resolver.rs  │   │  service.rs  │                │
//! │  │              │   │              │   │              │                │
//! │  │  camelCase   │──►│  one batch   │──►│ QuoteService │                │
//! │  │  JSON DTOs,  │   │  catalog     │   │ validate →   │                │
//! │  │  both labour │   │  read        │   │ expand →     │                │
//! │  │  shapes      │   │              │   │ price        │                │
//! │  └──────────────┘   └──────────────┘   └──────────────┘                │
//! │                                                                         │
//! │  error.rs: QuoteServiceError — the three kinds the HTTP layer maps     │
//! │  to statuses (InvalidInput, UnpricedProduct, CatalogUnavailable)       │
//! │                                                                         │
//! │  All arithmetic lives in rainline-core; this crate only orchestrates.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use rainline_db::{Database, DbConfig};
//! use rainline_engine::{QuoteRequest, QuoteService};
//!
//! let db = Database::new(DbConfig::new("./rainline.db")).await?;
//! let service = QuoteService::new(db);
//!
//! let request: QuoteRequest = serde_json::from_str(body)?;
//! let quote = service.calculate_quote(&request).await?;
//! ```

pub mod error;
pub mod request;
pub mod resolver;
pub mod response;
pub mod service;

pub use error::{ErrorCode, ErrorResponse, QuoteServiceError, ServiceResult};
pub use request::{ElementInput, LabourInput, QuoteRequest};
pub use resolver::PricingResolver;
pub use response::{QuoteLineResponse, QuoteResponse};
pub use service::QuoteService;
