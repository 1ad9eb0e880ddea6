//! # Sale Filtering
//!
//! Equality filters over the ledger: by business, by salesperson, or both.
//! An unset dimension matches everything, so the zero-value filter is the
//! identity. Filtering never reorders records.
//!
//! The filtered set is what reports are built from: totals, histogram, and
//! the visible row list all come from one `apply` pass, which keeps every
//! panel of a report describing the same sales.

use crate::types::{Business, SaleRecord, Salesperson};

// =============================================================================
// Sale Filter
// =============================================================================

/// Which subset of the ledger a report should cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleFilter {
    pub business: Option<Business>,
    pub salesperson: Option<Salesperson>,
}

impl SaleFilter {
    /// A filter that matches every record.
    pub const fn new() -> Self {
        SaleFilter {
            business: None,
            salesperson: None,
        }
    }

    /// Constrains the filter to one business.
    pub const fn with_business(mut self, business: Business) -> Self {
        self.business = Some(business);
        self
    }

    /// Constrains the filter to one salesperson.
    pub const fn with_salesperson(mut self, salesperson: Salesperson) -> Self {
        self.salesperson = Some(salesperson);
        self
    }

    /// True when no dimension is constrained.
    pub const fn is_unconstrained(&self) -> bool {
        self.business.is_none() && self.salesperson.is_none()
    }

    /// Whether a single record passes every set dimension.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        if let Some(business) = self.business {
            if record.business != business {
                return false;
            }
        }
        if let Some(salesperson) = self.salesperson {
            if record.salesperson != salesperson {
                return false;
            }
        }
        true
    }

    /// Keeps matching records, preserving their relative order.
    pub fn apply(&self, records: Vec<SaleRecord>) -> Vec<SaleRecord> {
        if self.is_unconstrained() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
