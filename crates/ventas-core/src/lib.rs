//! # ventas-core: Pure Domain Logic for Ventas
//!
//! This crate is the **heart** of the sales ledger. It contains all domain
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ventas Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     HTTP Clients                                │   │
//! │  │    register a sale ──► browse the ledger ──► daily report      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/server (axum)                           │   │
//! │  │    POST /api/sales, GET /api/sales, GET /api/sales/report      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ventas-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌────────┐ ┌──────┐ │   │
//! │  │   │  types   │ │  intake  │ │ aggregate │ │ filter │ │ time │ │   │
//! │  │   │ Business │ │ validate │ │  totals   │ │ subset │ │ zone │ │   │
//! │  │   │ SaleRec. │ │ NewSale  │ │ histogram │ │  view  │ │ math │ │   │
//! │  │   └──────────┘ └──────────┘ └───────────┘ └────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   ventas-db (Ledger Store)                      │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Vocabularies (Business, Salesperson) and sale records
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`intake`] - Submission validation into insertable sales
//! - [`aggregate`] - Totals and the hourly histogram
//! - [`filter`] - Business/salesperson subset views
//! - [`time`] - Store-local calendar and clock math
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ventas_core::aggregate::aggregate;
//! use ventas_core::intake::{PriceInput, SaleSubmission};
//!
//! // Validate a client submission (never trust raw input)
//! let sale = SaleSubmission {
//!     business: Some("perlita".to_string()),
//!     salesperson: Some("luis".to_string()),
//!     price: Some(PriceInput::Text("350".to_string())),
//!     description: None,
//! }
//! .validate()
//! .unwrap();
//!
//! assert_eq!(sale.price.cents(), 35000);
//!
//! // Aggregation of nothing still covers every business
//! let totals = aggregate(&[]);
//! assert_eq!(totals.by_business.len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod intake;
pub mod money;
pub mod time;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ventas_core::Money` instead of
// `use ventas_core::money::Money`

pub use aggregate::{aggregate, hourly_histogram, HourlyHistogram, SalesTotals};
pub use error::{ValidationError, ValidationResult};
pub use filter::SaleFilter;
pub use intake::{PriceInput, SaleSubmission};
pub use money::Money;
pub use time::StoreZone;
pub use types::*;
