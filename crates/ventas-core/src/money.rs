//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A day of sales summed as floats drifts by fractions of a centavo,     │
//! │  and the daily total stops matching the register.                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    $350.00 is stored as 35000. Addition is exact, always.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ventas_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(35000); // $350.00
//!
//! // Parse what a client typed
//! let typed: Money = "99.99".parse().unwrap();
//! assert_eq!(typed.cents(), 9999);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(99.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction of two amounts stays well-defined
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; the wire form is bare cents
///
/// Every price in the system flows through this type: intake parses client
/// input into `Money`, the ledger stores `cents()`, and the aggregator sums
/// `Money` values. Only the API layer renders decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ventas_core::money::Money;
    ///
    /// let price = Money::from_cents(9999); // Represents $99.99
    /// assert_eq!(price.cents(), 9999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pesos) portion.
    ///
    /// ## Example
    /// ```rust
    /// use ventas_core::money::Money;
    ///
    /// let price = Money::from_cents(9999);
    /// assert_eq!(price.pesos(), 99);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use ventas_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Renders the amount as a plain 2-digit decimal string.
    ///
    /// This is the wire format for prices in API responses. No currency
    /// symbol, no thousands separators; localized formatting is a client
    /// concern.
    ///
    /// ## Example
    /// ```rust
    /// use ventas_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(35000).to_decimal_string(), "350.00");
    /// assert_eq!(Money::from_cents(50).to_decimal_string(), "0.50");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Parses a decimal amount ("350", "99.99", "0.5") into centavos.
///
/// ## Rules
/// - At most 2 fraction digits; a single digit means tenths ("0.5" = 50)
/// - Negative amounts are rejected; zero is accepted
/// - No signs, separators, exponents, or currency symbols
///
/// ## Example
/// ```rust
/// use ventas_core::money::Money;
///
/// let price: Money = "150".parse().unwrap();
/// assert_eq!(price.cents(), 15000);
///
/// assert!("1.999".parse::<Money>().is_err());
/// assert!("-5".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid_price("is empty"));
        }
        if trimmed.starts_with('-') {
            return Err(invalid_price("must not be negative"));
        }

        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid_price(&format!(
                "'{trimmed}' is not a valid decimal amount"
            )));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid_price(&format!(
                "'{trimmed}' is not a valid decimal amount"
            )));
        }
        if frac.len() > 2 {
            return Err(invalid_price("cannot have more than 2 decimal places"));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|pesos| pesos.checked_mul(100))
                .ok_or_else(|| invalid_price("is too large"))?
        };
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        whole_cents
            .checked_add(frac_cents)
            .map(Money::from_cents)
            .ok_or_else(|| invalid_price("is too large"))
    }
}

fn invalid_price(reason: &str) -> ValidationError {
    ValidationError::InvalidPrice {
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summation, so a list of prices folds directly into a total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(9999);
        assert_eq!(money.cents(), 9999);
        assert_eq!(money.pesos(), 99);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_whole_amount() {
        let money: Money = "350".parse().unwrap();
        assert_eq!(money.cents(), 35000);
    }

    #[test]
    fn test_parse_fractional_amounts() {
        assert_eq!("99.99".parse::<Money>().unwrap().cents(), 9999);
        assert_eq!("0.5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!(".25".parse::<Money>().unwrap().cents(), 25);
        assert_eq!("100.".parse::<Money>().unwrap().cents(), 10000);
        assert_eq!("  45 ".parse::<Money>().unwrap().cents(), 4500);
    }

    #[test]
    fn test_parse_zero_is_accepted() {
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("0.00".parse::<Money>().unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = "-5".parse::<Money>().unwrap_err();
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        let err = "1.999".parse::<Money>().unwrap_err();
        assert_eq!(err.to_string(), "price cannot have more than 2 decimal places");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["abc", "1,000", "$100", "1e3", "1.2.3", "."] {
            assert!(bad.parse::<Money>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = "92233720368547758.08".parse::<Money>().unwrap_err();
        assert_eq!(err.to_string(), "price is too large");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(9999)), "$99.99");
        assert_eq!(format!("{}", Money::from_cents(50000)), "$500.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(35000).to_decimal_string(), "350.00");
        assert_eq!(Money::from_cents(50).to_decimal_string(), "0.50");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(10000);
        let b = Money::from_cents(5000);

        assert_eq!((a + b).cents(), 15000);
        assert_eq!((a - b).cents(), 5000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 15000);
    }

    #[test]
    fn test_sum_of_prices() {
        let prices = [Money::from_cents(100), Money::from_cents(250), Money::zero()];
        let total: Money = prices.into_iter().sum();
        assert_eq!(total.cents(), 350);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }
}
