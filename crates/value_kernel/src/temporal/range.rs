//! Closed ranges over an ordered instant

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use super::instant::{FromInstant, Instant};
use super::TemporalError;

/// How a range relates to the `PAST`/`FUTURE` sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundedness {
    /// Neither bound is a sentinel
    Bounded,
    /// Starts at `PAST`, ends before `FUTURE`
    SemiBoundedPast,
    /// Starts after `PAST`, ends at `FUTURE`
    SemiBoundedFuture,
    /// Exactly `[PAST, FUTURE]`
    Infinite,
}

/// A closed range `[start, end]`
///
/// Bounds are stored verbatim. A range whose end precedes its start is the
/// empty range; it is legal and formats to the empty string.
///
/// The derived ordering compares `start` first, then `end`, and is consistent
/// with equality. Field order is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemporalRange<I> {
    start: I,
    end: I,
}

impl<I: Instant> TemporalRange<I> {
    /// Creates a range without reordering or rejecting the bounds
    pub fn new(start: I, end: I) -> Self {
        Self { start, end }
    }

    /// `[PAST, FUTURE]`
    pub fn infinite() -> Self {
        Self::new(I::past(), I::future())
    }

    /// `[PAST, end]`
    pub fn up_to(end: I) -> Self {
        Self::new(I::past(), end)
    }

    /// `[start, FUTURE]`
    pub fn starting_on(start: I) -> Self {
        Self::new(start, I::future())
    }

    /// Parses `<start>/<end>`, splitting on the first `/`
    pub fn from_iso8601_interval(input: &str) -> Result<Self, TemporalError> {
        input.parse()
    }

    pub fn start(&self) -> I {
        self.start
    }

    pub fn end(&self) -> I {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// True when the start equals the `PAST` sentinel
    pub fn is_past(&self) -> bool {
        self.start == I::past()
    }

    /// True when the end equals the `FUTURE` sentinel
    pub fn is_future(&self) -> bool {
        self.end == I::future()
    }

    pub fn is_infinite(&self) -> bool {
        self.is_past() && self.is_future()
    }

    /// Classifies the range against the sentinels
    ///
    /// Uses the same value checks as [`is_past`](Self::is_past) and
    /// [`is_future`](Self::is_future), so a finite range that happens to start
    /// on `PAST` still reports [`Boundedness::SemiBoundedPast`].
    pub fn boundedness(&self) -> Boundedness {
        match (self.is_past(), self.is_future()) {
            (true, true) => Boundedness::Infinite,
            (true, false) => Boundedness::SemiBoundedPast,
            (false, true) => Boundedness::SemiBoundedFuture,
            (false, false) => Boundedness::Bounded,
        }
    }

    /// Returns true if `start <= instant <= end`
    pub fn includes(&self, instant: I) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns true if both bounds of `other` are included
    ///
    /// This is bound-wise containment, not subset logic: an empty `other`
    /// whose bounds fall inside this range is included.
    pub fn includes_range<J>(&self, other: &TemporalRange<J>) -> bool
    where
        J: Instant,
        I: FromInstant<J>,
    {
        self.includes_bounds(&other.convert())
    }

    /// Returns true if the ranges share at least one instant
    pub fn overlaps<J>(&self, other: &TemporalRange<J>) -> bool
    where
        J: Instant,
        I: FromInstant<J>,
    {
        self.overlaps_same(&other.convert())
    }

    /// Units strictly between two non-overlapping ranges
    ///
    /// Returns `None` when the ranges overlap. `Some(0)` means the ranges are
    /// adjacent. Units are days for dates and seconds for timestamps.
    pub fn gap<J>(&self, other: &TemporalRange<J>) -> Option<i64>
    where
        J: Instant,
        I: FromInstant<J>,
    {
        self.gap_same(&other.convert())
    }

    /// Returns true if the ranges do not overlap and have no gap between them
    pub fn abuts<J>(&self, other: &TemporalRange<J>) -> bool
    where
        J: Instant,
        I: FromInstant<J>,
    {
        self.abuts_same(&other.convert())
    }

    /// Removes the overlap with `other`, keeping a single contiguous piece
    ///
    /// The result is always expressed in this range's granularity.
    ///
    /// # Errors
    ///
    /// - [`TemporalError::NotOverlapping`] if the ranges do not overlap
    /// - [`TemporalError::WouldBisect`] if `other` lies strictly inside this
    ///   range, leaving a piece on each side
    pub fn diff<J>(&self, other: &TemporalRange<J>) -> Result<Self, TemporalError>
    where
        J: Instant,
        I: FromInstant<J>,
    {
        let other: Self = other.convert();
        if !self.overlaps_same(&other) {
            debug!(range = ?self, other = ?other, "diff refused: no overlap");
            return Err(TemporalError::NotOverlapping);
        }
        if self.start < other.start && self.end > other.end {
            debug!(range = ?self, other = ?other, "diff refused: would bisect");
            return Err(TemporalError::WouldBisect);
        }

        if self.start < other.start {
            Ok(Self::new(self.start, other.start.prev_unit()))
        } else {
            Ok(Self::new(other.end.next_unit(), self.end))
        }
    }

    /// Total order: start first, then end
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Number of units covered, counting both bounds
    ///
    /// Returns `None` for an empty range.
    pub fn length(&self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some(I::units_between(self.start, self.end) + 1)
        }
    }

    /// Re-expresses the range at another granularity
    ///
    /// Sentinel bounds map onto the target's sentinels; every other bound goes
    /// through [`FromInstant`].
    pub fn convert<J>(&self) -> TemporalRange<J>
    where
        J: Instant + FromInstant<I>,
    {
        let start = if self.is_past() { J::past() } else { J::from_instant(self.start) };
        let end = if self.is_future() { J::future() } else { J::from_instant(self.end) };
        TemporalRange::new(start, end)
    }
}

impl<I: Instant> TemporalRange<I> {
    fn includes_bounds(&self, other: &Self) -> bool {
        self.includes(other.start) && self.includes(other.end)
    }

    fn overlaps_same(&self, other: &Self) -> bool {
        other.includes(self.start) || other.includes(self.end) || self.includes_bounds(other)
    }

    fn gap_same(&self, other: &Self) -> Option<i64> {
        if self.overlaps_same(other) {
            return None;
        }
        let (lower, higher) = match self.cmp(other) {
            Ordering::Greater => (other, self),
            _ => (self, other),
        };
        Some(I::units_between(lower.end, higher.start) - 1)
    }

    pub(crate) fn abuts_same(&self, other: &Self) -> bool {
        !self.overlaps_same(other) && self.gap_same(other) == Some(0)
    }
}

impl<I: Instant> fmt::Display for TemporalRange<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}", self.start.to_iso8601(), self.end.to_iso8601())
    }
}

impl<I: Instant> FromStr for TemporalRange<I> {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('/')
            .ok_or_else(|| TemporalError::MissingSeparator(s.to_string()))?;
        let range = Self::new(I::from_iso8601(start)?, I::from_iso8601(end)?);
        trace!(input = s, range = ?range, "parsed interval");
        Ok(range)
    }
}
