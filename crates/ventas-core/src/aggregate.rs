//! # Sales Aggregation
//!
//! Pure reduction of a list of sale records into report figures.
//!
//! ## Pipeline Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Reporting Pipeline                                 │
//! │                                                                         │
//! │   ledger rows ──► SaleFilter::apply ──┬──► aggregate()                 │
//! │                                       │      └─► SalesTotals           │
//! │                                       │           overall              │
//! │                                       │           by_business          │
//! │                                       │           by_salesperson       │
//! │                                       │                                 │
//! │                                       └──► hourly_histogram()          │
//! │                                              └─► HourlyHistogram       │
//! │                                                   24 × (sum, count)    │
//! │                                                                         │
//! │   Same filtered set feeds both outputs, so totals and histogram        │
//! │   always describe the same sales.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is deterministic: a given input slice produces exactly
//! one output, maps iterate in a fixed order, and the histogram always has
//! 24 buckets regardless of input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::time::StoreZone;
use crate::types::{Business, SaleRecord, Salesperson};

/// Fixed bucket count of the hourly histogram.
pub const HOURS_PER_DAY: usize = 24;

// =============================================================================
// Sales Totals
// =============================================================================

/// Revenue totals over a set of sales.
///
/// `by_business` always contains every known business, pre-seeded at zero,
/// so report consumers can render both storefronts without existence
/// checks. `by_salesperson` carries only salespersons that actually sold
/// something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub overall: Money,
    pub by_business: BTreeMap<Business, Money>,
    pub by_salesperson: BTreeMap<Salesperson, Money>,
}

/// Reduces records into overall, per-business, and per-salesperson totals.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use ventas_core::aggregate::aggregate;
/// use ventas_core::types::{Business, SaleRecord, Salesperson};
///
/// let record = SaleRecord {
///     id: 1,
///     business: Business::Perlita,
///     salesperson: Salesperson::Luis,
///     price_cents: 10000,
///     description: None,
///     created_at: Utc::now(),
/// };
///
/// let totals = aggregate(&[record]);
/// assert_eq!(totals.overall.cents(), 10000);
/// // The business without sales is still present, at zero.
/// assert_eq!(totals.by_business[&Business::Patron].cents(), 0);
/// ```
pub fn aggregate(records: &[SaleRecord]) -> SalesTotals {
    let mut by_business: BTreeMap<Business, Money> =
        Business::ALL.iter().map(|b| (*b, Money::zero())).collect();
    let mut by_salesperson: BTreeMap<Salesperson, Money> = BTreeMap::new();

    for record in records {
        let price = record.price();
        *by_business.entry(record.business).or_insert_with(Money::zero) += price;
        *by_salesperson
            .entry(record.salesperson)
            .or_insert_with(Money::zero) += price;
    }

    SalesTotals {
        overall: records.iter().map(SaleRecord::price).sum(),
        by_business,
        by_salesperson,
    }
}

// =============================================================================
// Hourly Histogram
// =============================================================================

/// Revenue and sale counts bucketed by local hour of day.
///
/// Always 24 buckets, index = hour (0-23), zero-filled where nothing sold.
/// Bucketing follows the store clock, not UTC: a sale stored at 05:30Z
/// belongs to the 23:00 bucket when the store runs at UTC-6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyHistogram {
    pub sums: [Money; HOURS_PER_DAY],
    pub counts: [u32; HOURS_PER_DAY],
}

impl HourlyHistogram {
    /// All-zero histogram.
    pub fn empty() -> Self {
        HourlyHistogram {
            sums: [Money::zero(); HOURS_PER_DAY],
            counts: [0; HOURS_PER_DAY],
        }
    }

    /// Axis labels matching the buckets: `"00:00"` through `"23:00"`.
    pub fn labels() -> [String; HOURS_PER_DAY] {
        std::array::from_fn(|hour| format!("{hour:02}:00"))
    }
}

/// Buckets records by the store-local hour they were created in.
pub fn hourly_histogram(records: &[SaleRecord], zone: &StoreZone) -> HourlyHistogram {
    let mut histogram = HourlyHistogram::empty();
    for record in records {
        let hour = zone.hour_of(record.created_at) as usize;
        histogram.sums[hour] += record.price();
        histogram.counts[hour] += 1;
    }
    histogram
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn record(
        id: i64,
        business: Business,
        salesperson: Salesperson,
        cents: i64,
        created_at: chrono::DateTime<Utc>,
    ) -> SaleRecord {
        SaleRecord {
            id,
            business,
            salesperson,
            price_cents: cents,
            description: None,
            created_at,
        }
    }

    fn utc_minus_six() -> StoreZone {
        StoreZone::Fixed(FixedOffset::west_opt(6 * 3600).unwrap())
    }

    #[test]
    fn test_empty_input_yields_zero_seeded_totals() {
        let totals = aggregate(&[]);

        assert!(totals.overall.is_zero());
        assert_eq!(totals.by_business.len(), 2);
        assert!(totals.by_business[&Business::Perlita].is_zero());
        assert!(totals.by_business[&Business::Patron].is_zero());
        assert!(totals.by_salesperson.is_empty());
    }

    #[test]
    fn test_totals_accumulate_per_business_and_salesperson() {
        let now = Utc::now();
        let records = vec![
            record(1, Business::Perlita, Salesperson::Luis, 10000, now),
            record(2, Business::Patron, Salesperson::Walter, 5000, now),
        ];

        let totals = aggregate(&records);
        assert_eq!(totals.overall, Money::from_cents(15000));
        assert_eq!(totals.by_business[&Business::Perlita], Money::from_cents(10000));
        assert_eq!(totals.by_business[&Business::Patron], Money::from_cents(5000));
        assert_eq!(
            totals.by_salesperson[&Salesperson::Luis],
            Money::from_cents(10000)
        );
        assert_eq!(
            totals.by_salesperson[&Salesperson::Walter],
            Money::from_cents(5000)
        );
    }

    #[test]
    fn test_by_salesperson_has_no_zero_entries() {
        let records = vec![record(
            1,
            Business::Perlita,
            Salesperson::Luis,
            100,
            Utc::now(),
        )];

        let totals = aggregate(&records);
        assert_eq!(totals.by_salesperson.len(), 1);
        assert!(!totals.by_salesperson.contains_key(&Salesperson::Walter));
    }

    #[test]
    fn test_same_salesperson_across_businesses_accumulates() {
        let now = Utc::now();
        let records = vec![
            record(1, Business::Perlita, Salesperson::Perlita, 2500, now),
            record(2, Business::Patron, Salesperson::Perlita, 7500, now),
        ];

        let totals = aggregate(&records);
        assert_eq!(
            totals.by_salesperson[&Salesperson::Perlita],
            Money::from_cents(10000)
        );
    }

    #[test]
    fn test_totals_serialize_with_token_keys() {
        let records = vec![record(
            1,
            Business::Perlita,
            Salesperson::WalterJr,
            100,
            Utc::now(),
        )];

        let json = serde_json::to_value(aggregate(&records)).unwrap();
        assert_eq!(json["by_business"]["perlita"], 100);
        assert_eq!(json["by_business"]["patron"], 0);
        assert_eq!(json["by_salesperson"]["walter_jr"], 100);
    }

    #[test]
    fn test_histogram_buckets_by_local_hour() {
        let zone = utc_minus_six();
        // 20:05Z and 20:40Z are both 14:xx at UTC-6.
        let records = vec![
            record(
                1,
                Business::Perlita,
                Salesperson::Luis,
                10000,
                Utc.with_ymd_and_hms(2024, 3, 10, 20, 5, 0).unwrap(),
            ),
            record(
                2,
                Business::Patron,
                Salesperson::Walter,
                20000,
                Utc.with_ymd_and_hms(2024, 3, 10, 20, 40, 0).unwrap(),
            ),
        ];

        let histogram = hourly_histogram(&records, &zone);
        assert_eq!(histogram.sums[14], Money::from_cents(30000));
        assert_eq!(histogram.counts[14], 2);

        let other_hours: u32 = histogram
            .counts
            .iter()
            .enumerate()
            .filter(|(hour, _)| *hour != 14)
            .map(|(_, count)| count)
            .sum();
        assert_eq!(other_hours, 0);
    }

    #[test]
    fn test_histogram_edge_hours() {
        let zone = utc_minus_six();
        // 06:10Z is 00:10 local; 05:50Z is 23:50 the previous local day.
        let records = vec![
            record(
                1,
                Business::Perlita,
                Salesperson::Luis,
                100,
                Utc.with_ymd_and_hms(2024, 3, 10, 6, 10, 0).unwrap(),
            ),
            record(
                2,
                Business::Perlita,
                Salesperson::Luis,
                200,
                Utc.with_ymd_and_hms(2024, 3, 10, 5, 50, 0).unwrap(),
            ),
        ];

        let histogram = hourly_histogram(&records, &zone);
        assert_eq!(histogram.counts[0], 1);
        assert_eq!(histogram.sums[0], Money::from_cents(100));
        assert_eq!(histogram.counts[23], 1);
        assert_eq!(histogram.sums[23], Money::from_cents(200));
    }

    #[test]
    fn test_empty_histogram_is_all_zero() {
        let histogram = hourly_histogram(&[], &utc_minus_six());
        assert_eq!(histogram, HourlyHistogram::empty());
        assert_eq!(histogram.sums.len(), HOURS_PER_DAY);
    }

    #[test]
    fn test_histogram_is_deterministic() {
        let records = vec![
            record(
                1,
                Business::Perlita,
                Salesperson::Luis,
                125,
                Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap(),
            ),
            record(
                2,
                Business::Patron,
                Salesperson::Walter,
                275,
                Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap(),
            ),
        ];
        let zone = utc_minus_six();

        assert_eq!(
            hourly_histogram(&records, &zone),
            hourly_histogram(&records, &zone)
        );
        assert_eq!(aggregate(&records), aggregate(&records));
    }

    #[test]
    fn test_labels_match_bucket_indexes() {
        let labels = HourlyHistogram::labels();
        assert_eq!(labels.len(), HOURS_PER_DAY);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[9], "09:00");
        assert_eq!(labels[23], "23:00");
    }
}
