//! # Sale Intake
//!
//! Turns a raw client submission into a validated [`NewSale`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (deserialization)                               │
//! │  └── Rejects bodies that aren't JSON objects at all                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Presence: business, salesperson, price must be supplied           │
//! │  │   (absent, null, and empty-string are all "not supplied")           │
//! │  ├── Vocabulary: tokens must parse into Business / Salesperson         │
//! │  ├── Price: non-negative decimal, at most 2 fraction digits            │
//! │  └── Normalization: empty description becomes None                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (NOT NULL constraints)                              │
//! │                                                                         │
//! │  A NewSale that exists has passed all of this; the ledger never       │
//! │  re-validates.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ventas_core::intake::{PriceInput, SaleSubmission};
//!
//! let submission = SaleSubmission {
//!     business: Some("perlita".to_string()),
//!     salesperson: Some("luis".to_string()),
//!     price: Some(PriceInput::Text("350".to_string())),
//!     description: None,
//! };
//!
//! let sale = submission.validate().unwrap();
//! assert_eq!(sale.price.cents(), 35000);
//! ```

use serde::Deserialize;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Business, NewSale, Salesperson};

// =============================================================================
// Price Input
// =============================================================================

/// A price as a client sent it: JSON number or JSON string.
///
/// Form clients post `"price": "350"`, programmatic clients tend to post
/// `"price": 350`. Both are accepted and parsed through the same decimal
/// rules. Going through `serde_json::Number` keeps the client's literal
/// intact instead of laundering it through an `f64` round trip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(serde_json::Number),
    Text(String),
}

impl PriceInput {
    /// The decimal text to parse, or `None` when the input is blank text
    /// (which counts as "price not supplied").
    fn to_decimal_text(&self) -> Option<String> {
        match self {
            PriceInput::Number(n) => Some(n.to_string()),
            PriceInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

// =============================================================================
// Sale Submission
// =============================================================================

/// Raw intake payload. Every field is optional at this stage; `validate`
/// decides what is actually acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleSubmission {
    pub business: Option<String>,
    pub salesperson: Option<String>,
    pub price: Option<PriceInput>,
    pub description: Option<String>,
}

impl SaleSubmission {
    /// Validates the submission into a [`NewSale`].
    ///
    /// ## Rules
    /// - `business`, `salesperson`, `price` must be present; absent, null,
    ///   and empty-string are equivalent. All missing fields are reported
    ///   in one error.
    /// - Tokens must belong to the closed vocabularies.
    /// - The price must be a non-negative decimal with at most 2 fraction
    ///   digits. Zero is a valid amount.
    /// - A `description` of `""` is normalized to `None`; any other text
    ///   is stored exactly as submitted.
    pub fn validate(self) -> ValidationResult<NewSale> {
        let business = present_token(&self.business);
        let salesperson = present_token(&self.salesperson);
        let price = self.price.as_ref().and_then(PriceInput::to_decimal_text);

        let mut missing = Vec::new();
        if business.is_none() {
            missing.push("business");
        }
        if salesperson.is_none() {
            missing.push("salesperson");
        }
        if price.is_none() {
            missing.push("price");
        }

        if let (Some(business), Some(salesperson), Some(price)) = (business, salesperson, price) {
            Ok(NewSale {
                business: business.parse::<Business>()?,
                salesperson: salesperson.parse::<Salesperson>()?,
                price: price.parse::<Money>()?,
                description: self.description.filter(|d| !d.is_empty()),
            })
        } else {
            Err(ValidationError::MissingFields {
                fields: missing.into_iter().map(String::from).collect(),
            })
        }
    }
}

/// Present-and-non-blank token, trimmed.
fn present_token(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
