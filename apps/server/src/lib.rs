//! # Ventas API Server
//!
//! JSON API over the sales ledger.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       ventas-server                             │
//! │                                                                 │
//! │  HTTP ──► routes ──► handlers ──► ventas-core (validate,        │
//! │             │                      aggregate, filter)           │
//! │             │                          │                        │
//! │             ▼                          ▼                        │
//! │        tower-http               ventas-db (insert, list)        │
//! │       (trace, CORS)                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers stay thin: validation and aggregation live in `ventas-core`,
//! persistence in `ventas-db`. This crate owns only request extraction,
//! response DTOs, and the error envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use ventas_core::StoreZone;
use ventas_db::Database;

pub use routes::router;

/// Shared state handed to every request handler.
///
/// Cloning is cheap: `Database` clones share one pool and `StoreZone`
/// is `Copy`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ledger storage
    pub db: Database,
    /// Timezone for date filtering, hour bucketing, and timestamp display
    pub zone: StoreZone,
}
