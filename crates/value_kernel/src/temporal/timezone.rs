//! Projection of date ranges onto a wall-clock timezone

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::instant::Instant;
use super::{DateRange, DateTimeRange};

/// IANA timezone, serialized by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(pub Tz);

impl FromStr for Timezone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| format!("unknown timezone: {s}"))
    }
}

impl TryFrom<String> for Timezone {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.0.name().to_string()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// First second of `date` on this zone's wall clock
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<FixedOffset> {
        self.localize(date.and_time(NaiveTime::MIN))
    }

    /// Last whole second of `date` on this zone's wall clock
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<FixedOffset> {
        let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.localize(date.and_time(last_second))
    }

    /// Ambiguous wall-clock times take the earlier reading; times skipped by a
    /// transition are read as UTC.
    fn localize(&self, naive: NaiveDateTime) -> DateTime<FixedOffset> {
        match self.0.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.fixed_offset(),
            LocalResult::None => naive.and_utc().fixed_offset(),
        }
    }
}

impl DateRange {
    /// Expands whole days into the timestamps they cover in `tz`
    ///
    /// Sentinel bounds become the date-time sentinels.
    pub fn to_datetime_range(&self, tz: &Timezone) -> DateTimeRange {
        let start = if self.is_past() {
            <DateTime<FixedOffset> as Instant>::past()
        } else {
            tz.start_of_day(self.start())
        };
        let end = if self.is_future() {
            <DateTime<FixedOffset> as Instant>::future()
        } else {
            tz.end_of_day(self.end())
        };
        DateTimeRange::new(start, end)
    }
}
