//! # ventas-db: Ledger Storage
//!
//! SQLite persistence for the sales ledger.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ventas-db                            │
//! │                                                             │
//! │  ┌───────────┐   ┌──────────────┐   ┌───────────────────┐   │
//! │  │ DbConfig  │──►│   Database   │──►│  SaleRepository   │   │
//! │  │ (options) │   │ (pool owner) │   │  (sales table)    │   │
//! │  └───────────┘   └──────┬───────┘   └───────────────────┘   │
//! │                         │                                   │
//! │                         ▼                                   │
//! │                  ┌─────────────┐                            │
//! │                  │ migrations  │  embedded, run at startup  │
//! │                  └─────────────┘                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use ventas_db::{Database, DbConfig};
//! use ventas_core::types::{Business, NewSale, Salesperson};
//! use ventas_core::Money;
//!
//! # async fn example() -> Result<(), ventas_db::DbError> {
//! let db = Database::new(DbConfig::new("./sales.db")).await?;
//!
//! let id = db
//!     .sales()
//!     .insert(&NewSale {
//!         business: Business::Perlita,
//!         salesperson: Salesperson::Luis,
//!         price: Money::from_cents(25_000),
//!         description: None,
//!     })
//!     .await?;
//!
//! println!("recorded sale #{id}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::sale::SaleRepository;
