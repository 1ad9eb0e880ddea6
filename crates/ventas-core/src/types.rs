//! # Domain Types
//!
//! Core data structures for the sales ledger.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Business ───────┐                                                      │
//! │  (closed set)    │                                                      │
//! │                  ├──► NewSale ──► [ledger insert] ──► SaleRecord       │
//! │  Salesperson ────┤     (validated                      (persisted      │
//! │  (closed set)    │      intake)                         row)           │
//! │                  │                                                      │
//! │  Money ──────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both vocabularies are closed: a sale referencing a token outside them is
//! rejected at intake, never stored. Tokens are the wire/storage form;
//! display labels are carried alongside for catalog responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Business
// =============================================================================

/// One of the two storefronts sales are recorded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Business {
    /// Perlita Joyería.
    Perlita,
    /// El Patrón.
    Patron,
}

impl Business {
    /// Every known business, in display order.
    pub const ALL: [Business; 2] = [Business::Perlita, Business::Patron];

    /// The stable token used on the wire and in storage.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Business::Perlita => "perlita",
            Business::Patron => "patron",
        }
    }

    /// Human-readable display label for catalog/UI use.
    pub const fn label(&self) -> &'static str {
        match self {
            Business::Perlita => "Perlita Joyería",
            Business::Patron => "El Patrón",
        }
    }
}

impl fmt::Display for Business {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Business {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "perlita" => Ok(Business::Perlita),
            "patron" => Ok(Business::Patron),
            other => Err(ValidationError::NotAllowed {
                field: "business".to_string(),
                value: other.to_string(),
                allowed: Business::ALL.iter().map(|b| b.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Salesperson
// =============================================================================

/// A member of staff allowed to record sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Salesperson {
    PerlitaJr,
    WalterJr,
    Luis,
    Walter,
    Perlita,
}

impl Salesperson {
    /// Every known salesperson, in display order.
    pub const ALL: [Salesperson; 5] = [
        Salesperson::PerlitaJr,
        Salesperson::WalterJr,
        Salesperson::Luis,
        Salesperson::Walter,
        Salesperson::Perlita,
    ];

    /// The stable token used on the wire and in storage.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Salesperson::PerlitaJr => "perlita_jr",
            Salesperson::WalterJr => "walter_jr",
            Salesperson::Luis => "luis",
            Salesperson::Walter => "walter",
            Salesperson::Perlita => "perlita",
        }
    }

    /// Human-readable display label for catalog/UI use.
    pub const fn label(&self) -> &'static str {
        match self {
            Salesperson::PerlitaJr => "Perlita Jr",
            Salesperson::WalterJr => "Walter Jr",
            Salesperson::Luis => "Luis",
            Salesperson::Walter => "Walter",
            Salesperson::Perlita => "Perlita",
        }
    }
}

impl fmt::Display for Salesperson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Salesperson {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "perlita_jr" => Ok(Salesperson::PerlitaJr),
            "walter_jr" => Ok(Salesperson::WalterJr),
            "luis" => Ok(Salesperson::Luis),
            "walter" => Ok(Salesperson::Walter),
            "perlita" => Ok(Salesperson::Perlita),
            other => Err(ValidationError::NotAllowed {
                field: "salesperson".to_string(),
                value: other.to_string(),
                allowed: Salesperson::ALL
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A persisted row of the sales ledger.
///
/// `created_at` is assigned by the store at insert time (UTC); clients can
/// never supply or override it. Calendar grouping and display rendering
/// happen in the store's local timezone, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct SaleRecord {
    pub id: i64,
    pub business: Business,
    pub salesperson: Salesperson,
    pub price_cents: i64,
    /// Optional free text. Absent and empty are the same thing: intake
    /// normalizes an empty submission to `None` before the row is written.
    pub description: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl SaleRecord {
    /// The sale amount as typed money.
    #[inline]
    pub const fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// New Sale
// =============================================================================

/// A validated sale ready for insertion.
///
/// Produced only by intake validation; the ledger accepts nothing else.
/// There is no id or timestamp here: the store assigns both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub business: Business,
    pub salesperson: Salesperson,
    pub price: Money,
    pub description: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
