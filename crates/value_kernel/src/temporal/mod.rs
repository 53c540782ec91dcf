//! Date and date-time range algebra
//!
//! A single generic [`TemporalRange`] carries the whole algebra: comparison,
//! overlap, gap, abutment, containment and single-piece difference. The two
//! public variants only differ in the [`Instant`] they are built over:
//! - [`DateRange`]: calendar dates, arithmetic in whole days
//! - [`DateTimeRange`]: offset-aware timestamps, arithmetic in seconds
//!
//! Unbounded edges are represented by the `PAST` and `FUTURE` sentinels of the
//! instant type, compared by value.

pub mod instant;
pub mod loose;
pub mod range;
pub mod series;
pub mod timezone;

use chrono::{DateTime, FixedOffset, NaiveDate};
use thiserror::Error;

pub use instant::{FromInstant, Instant};
pub use loose::LooseBounds;
pub use range::{Boundedness, TemporalRange};
pub use series::{is_contiguous, series_end, series_span, series_start};
pub use timezone::Timezone;

/// Range over calendar dates
pub type DateRange = TemporalRange<NaiveDate>;

/// Range over offset-aware timestamps
pub type DateTimeRange = TemporalRange<DateTime<FixedOffset>>;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid interval {0:?}: expected <start>/<end>")]
    MissingSeparator(String),

    #[error("Invalid instant {input:?}: {reason}")]
    InvalidInstant {
        input: String,
        reason: String,
    },

    #[error("Range data must be a record, got {0}")]
    NotARecord(String),

    #[error("Ranges must overlap")]
    NotOverlapping,

    #[error("Range must not be exclusively contained")]
    WouldBisect,

    #[error("Series is empty")]
    EmptySeries,
}

impl TemporalError {
    /// Returns true for malformed interval or instant text
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            TemporalError::MissingSeparator(_) | TemporalError::InvalidInstant { .. }
        )
    }

    /// Returns true for an illegal difference between two ranges
    pub fn is_range_error(&self) -> bool {
        matches!(self, TemporalError::NotOverlapping | TemporalError::WouldBisect)
    }
}
