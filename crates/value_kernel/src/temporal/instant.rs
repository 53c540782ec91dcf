//! Instant capability consumed by the range algebra
//!
//! A range never looks inside its bounds. It only orders them, steps them by
//! one unit, counts the units between two of them and renders them as text.
//! The kernel ships two granularities:
//! - `NaiveDate`: calendar dates, one unit is a day
//! - `DateTime<FixedOffset>`: offset-aware timestamps, one unit is a second

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;
use tracing::debug;

use super::TemporalError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// An ordered point in time usable as a range bound
///
/// Sentinels are plain values: a bound that happens to equal `past()` or
/// `future()` is indistinguishable from an unbounded edge.
pub trait Instant: Copy + Ord + fmt::Debug {
    /// Textual form of the far-past sentinel
    const PAST: &'static str;
    /// Textual form of the far-future sentinel
    const FUTURE: &'static str;

    /// The far-past sentinel standing in for an unbounded start
    fn past() -> Self;

    /// The far-future sentinel standing in for an unbounded end
    fn future() -> Self;

    /// Parses a single ISO-8601 instant
    fn from_iso8601(input: &str) -> Result<Self, TemporalError>;

    /// Renders the canonical ISO-8601 form
    fn to_iso8601(&self) -> String;

    /// One unit later, saturating at the representable maximum
    fn next_unit(self) -> Self;

    /// One unit earlier, saturating at the representable minimum
    fn prev_unit(self) -> Self;

    /// Whole units elapsed from `from` to `to` (negative when `to` is earlier)
    fn units_between(from: Self, to: Self) -> i64;
}

impl Instant for NaiveDate {
    const PAST: &'static str = "0001-01-01";
    const FUTURE: &'static str = "9999-12-31";

    fn past() -> Self {
        NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    fn future() -> Self {
        NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
    }

    fn from_iso8601(input: &str) -> Result<Self, TemporalError> {
        let input = input.trim();
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))
            .map_err(|e| {
                debug!(input, error = %e, "rejected date");
                TemporalError::InvalidInstant {
                    input: input.to_string(),
                    reason: e.to_string(),
                }
            })
    }

    fn to_iso8601(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }

    fn next_unit(self) -> Self {
        self.checked_add_signed(Duration::days(1)).unwrap_or(self)
    }

    fn prev_unit(self) -> Self {
        self.checked_sub_signed(Duration::days(1)).unwrap_or(self)
    }

    fn units_between(from: Self, to: Self) -> i64 {
        to.signed_duration_since(from).num_days()
    }
}

impl Instant for DateTime<FixedOffset> {
    const PAST: &'static str = "0001-01-01T00:00:00+00:00";
    const FUTURE: &'static str = "9999-12-31T23:59:59+00:00";

    fn past() -> Self {
        utc_instant(1, 1, 1, NaiveTime::MIN).unwrap_or(DateTime::<Utc>::MIN_UTC.fixed_offset())
    }

    fn future() -> Self {
        NaiveTime::from_hms_opt(23, 59, 59)
            .and_then(|time| utc_instant(9999, 12, 31, time))
            .unwrap_or(DateTime::<Utc>::MAX_UTC.fixed_offset())
    }

    fn from_iso8601(input: &str) -> Result<Self, TemporalError> {
        let input = input.trim();
        DateTime::parse_from_rfc3339(input)
            .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%z"))
            .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%z"))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
                    .map(|naive| naive.and_utc().fixed_offset())
            })
            .or_else(|_| {
                NaiveDate::parse_from_str(input, DATE_FORMAT)
                    .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
            })
            .map_err(|e| {
                debug!(input, error = %e, "rejected timestamp");
                TemporalError::InvalidInstant {
                    input: input.to_string(),
                    reason: e.to_string(),
                }
            })
    }

    fn to_iso8601(&self) -> String {
        self.format(DATETIME_FORMAT).to_string()
    }

    fn next_unit(self) -> Self {
        self.checked_add_signed(Duration::seconds(1)).unwrap_or(self)
    }

    fn prev_unit(self) -> Self {
        self.checked_sub_signed(Duration::seconds(1)).unwrap_or(self)
    }

    fn units_between(from: Self, to: Self) -> i64 {
        to.signed_duration_since(from).num_seconds()
    }
}

fn utc_instant(year: i32, month: u32, day: u32, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(time).and_utc().fixed_offset())
}

/// Conversion of an instant from another granularity
///
/// Lets a range accept operands expressed at a different granularity while
/// always answering in its own.
pub trait FromInstant<J> {
    fn from_instant(instant: J) -> Self;
}

impl<I: Instant> FromInstant<I> for I {
    fn from_instant(instant: I) -> Self {
        instant
    }
}

/// A date becomes midnight UTC of that day
impl FromInstant<NaiveDate> for DateTime<FixedOffset> {
    fn from_instant(instant: NaiveDate) -> Self {
        instant.and_time(NaiveTime::MIN).and_utc().fixed_offset()
    }
}

/// A timestamp becomes the calendar date on its own offset's wall clock,
/// matching how a date-time string parses as a date
impl FromInstant<DateTime<FixedOffset>> for NaiveDate {
    fn from_instant(instant: DateTime<FixedOffset>) -> Self {
        instant.date_naive()
    }
}
