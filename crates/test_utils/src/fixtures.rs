//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common value objects. The date
//! ranges reproduce the worked examples used throughout the range tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use value_kernel::{Currency, DateRange, DateTimeRange, Money};

/// Builds a date, panicking on an impossible calendar day
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

/// Fixture for range test data
pub struct RangeFixtures;

impl RangeFixtures {
    /// July 2006, inclusive of August 1st
    pub fn july_2006() -> DateRange {
        DateRange::new(date(2006, 7, 1), date(2006, 8, 1))
    }

    /// Overlaps the second half of [`july_2006`](Self::july_2006)
    pub fn mid_july_to_mid_august_2006() -> DateRange {
        DateRange::new(date(2006, 7, 15), date(2006, 8, 15))
    }

    /// Most of July 2006
    pub fn july_1_to_30_2006() -> DateRange {
        DateRange::new(date(2006, 7, 1), date(2006, 7, 30))
    }

    /// Strictly inside [`july_1_to_30_2006`](Self::july_1_to_30_2006)
    pub fn july_2_to_13_2006() -> DateRange {
        DateRange::new(date(2006, 7, 2), date(2006, 7, 13))
    }

    /// Three abutting ranges from July to late September 2006
    pub fn contiguous_series() -> Vec<DateRange> {
        vec![
            DateRange::new(date(2006, 7, 8), date(2006, 9, 5)),
            DateRange::new(date(2006, 9, 6), date(2006, 9, 15)),
            DateRange::new(date(2006, 9, 16), date(2006, 9, 25)),
        ]
    }

    /// Like [`contiguous_series`](Self::contiguous_series) with the last
    /// range overlapping its neighbour on September 15th
    pub fn overlapping_series() -> Vec<DateRange> {
        vec![
            DateRange::new(date(2006, 7, 8), date(2006, 9, 5)),
            DateRange::new(date(2006, 9, 6), date(2006, 9, 15)),
            DateRange::new(date(2006, 9, 15), date(2006, 9, 25)),
        ]
    }

    /// A working day in UTC
    pub fn business_hours() -> DateTimeRange {
        "2006-07-03T09:00:00+00:00/2006-07-03T17:00:00+00:00"
            .parse()
            .unwrap_or_else(|e| panic!("invalid fixture range: {e}"))
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// For currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// Zero decimal places
    pub fn jpy_10000() -> Money {
        Money::new(dec!(10000), Currency::JPY)
    }
}
