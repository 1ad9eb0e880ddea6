//! # Local Time Helpers
//!
//! The ledger stores UTC instants; everything calendar-shaped (which day a
//! sale belongs to, which hour bucket it lands in, how a timestamp is shown)
//! is answered in the store's local timezone. This module owns that
//! conversion.
//!
//! ## The Boundary Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store clock at UTC-6:                                                  │
//! │                                                                         │
//! │   UTC:    ... 2024-03-10 05:30Z | 2024-03-10 06:10Z ...                │
//! │   local:  ... 2024-03-09 23:30  | 2024-03-10 00:10  ...                │
//! │                                 │                                       │
//! │          "sales of 2024-03-10" starts HERE, not at the UTC midnight    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `StoreZone` is the single value threaded through the repository, the
//! aggregator, and the API: host-local for production, a pinned offset when
//! a deployment (or a test) needs the store clock to be exact and stable.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Render format for timestamps shown to clients (local wall-clock).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Store Zone
// =============================================================================

/// The timezone the storefronts operate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreZone {
    /// The host system's timezone (DST-aware).
    Local,
    /// A pinned UTC offset such as -06:00.
    Fixed(FixedOffset),
}

impl StoreZone {
    /// UTC window covering one local calendar day: `[local 00:00, next
    /// local 00:00)`.
    ///
    /// Returns `None` when the day has no local midnight (a DST jump right
    /// at 00:00); callers treat that as an unusable date rather than guess
    /// a boundary.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    /// use ventas_core::time::StoreZone;
    ///
    /// let zone = StoreZone::Fixed(FixedOffset::west_opt(6 * 3600).unwrap());
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    ///
    /// let (start, end) = zone.day_bounds(day).unwrap();
    /// assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap());
    /// assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap());
    /// ```
    pub fn day_bounds(&self, day: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match self {
            StoreZone::Local => day_bounds_in(day, &Local),
            StoreZone::Fixed(offset) => day_bounds_in(day, offset),
        }
    }

    /// Local hour of day (0-23) for a stored instant.
    pub fn hour_of(&self, ts: DateTime<Utc>) -> u32 {
        match self {
            StoreZone::Local => ts.with_timezone(&Local).hour(),
            StoreZone::Fixed(offset) => ts.with_timezone(offset).hour(),
        }
    }

    /// Local calendar date a stored instant falls on.
    pub fn local_date(&self, ts: DateTime<Utc>) -> NaiveDate {
        match self {
            StoreZone::Local => ts.with_timezone(&Local).date_naive(),
            StoreZone::Fixed(offset) => ts.with_timezone(offset).date_naive(),
        }
    }

    /// Renders a stored instant as local wall-clock text
    /// (`YYYY-MM-DD HH:MM:SS`).
    pub fn format_timestamp(&self, ts: DateTime<Utc>) -> String {
        match self {
            StoreZone::Local => ts.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            StoreZone::Fixed(offset) => {
                ts.with_timezone(offset).format(TIMESTAMP_FORMAT).to_string()
            }
        }
    }
}

fn day_bounds_in<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = tz.from_local_datetime(&day.and_hms_opt(0, 0, 0)?).earliest()?;
    let end = tz
        .from_local_datetime(&day.succ_opt()?.and_hms_opt(0, 0, 0)?)
        .earliest()?;
    Some((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

impl Default for StoreZone {
    fn default() -> Self {
        StoreZone::Local
    }
}

impl fmt::Display for StoreZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreZone::Local => f.write_str("local"),
            StoreZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Parses `"local"` or a UTC offset like `"-06:00"`.
impl FromStr for StoreZone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(StoreZone::Local);
        }
        trimmed
            .parse::<FixedOffset>()
            .map(StoreZone::Fixed)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "timezone".to_string(),
                reason: format!("'{trimmed}' is not 'local' or a UTC offset like -06:00"),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_minus_six() -> StoreZone {
        StoreZone::Fixed(FixedOffset::west_opt(6 * 3600).unwrap())
    }

    #[test]
    fn test_day_bounds_for_negative_offset() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = utc_minus_six().day_bounds(day).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_day_bounds_for_positive_offset() {
        let zone = StoreZone::Fixed(FixedOffset::east_opt(5 * 3600 + 1800).unwrap());
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = zone.day_bounds(day).unwrap();

        // Local midnight at +05:30 is the previous UTC evening.
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_hour_of_crosses_the_utc_date_line() {
        let zone = utc_minus_six();
        let late_evening = Utc.with_ymd_and_hms(2024, 3, 10, 5, 30, 0).unwrap();

        // 05:30Z is 23:30 the previous local day.
        assert_eq!(zone.hour_of(late_evening), 23);
        assert_eq!(
            zone.local_date(late_evening),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_format_timestamp_renders_local_wall_clock() {
        let zone = utc_minus_six();
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 5, 30, 0).unwrap();
        assert_eq!(zone.format_timestamp(ts), "2024-03-09 23:30:00");
    }

    #[test]
    fn test_parse_store_zone() {
        assert_eq!("local".parse::<StoreZone>().unwrap(), StoreZone::Local);
        assert_eq!("LOCAL".parse::<StoreZone>().unwrap(), StoreZone::Local);
        assert_eq!(
            "-06:00".parse::<StoreZone>().unwrap(),
            StoreZone::Fixed(FixedOffset::west_opt(6 * 3600).unwrap())
        );
        assert_eq!(
            "+05:30".parse::<StoreZone>().unwrap(),
            StoreZone::Fixed(FixedOffset::east_opt(5 * 3600 + 1800).unwrap())
        );
        assert!("America/Mexico_City".parse::<StoreZone>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let zone = utc_minus_six();
        assert_eq!(zone.to_string().parse::<StoreZone>().unwrap(), zone);
        assert_eq!(StoreZone::Local.to_string(), "local");
    }
}
