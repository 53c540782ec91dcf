//! Operations over collections of ranges

use super::instant::Instant;
use super::range::TemporalRange;
use super::TemporalError;

/// Returns true if the ranges tile the timeline with no gaps or overlaps
///
/// Input order does not matter: a sorted copy is checked, the caller's slice
/// is left untouched. Empty and single-element inputs are contiguous.
pub fn is_contiguous<I: Instant>(ranges: &[TemporalRange<I>]) -> bool {
    let mut sorted = ranges.to_vec();
    sorted.sort();
    sorted.windows(2).all(|pair| pair[0].abuts_same(&pair[1]))
}

/// Earliest start across the series
pub fn series_start<I: Instant>(ranges: &[TemporalRange<I>]) -> Result<I, TemporalError> {
    ranges
        .iter()
        .map(TemporalRange::start)
        .min()
        .ok_or(TemporalError::EmptySeries)
}

/// Latest end across the series
pub fn series_end<I: Instant>(ranges: &[TemporalRange<I>]) -> Result<I, TemporalError> {
    ranges
        .iter()
        .map(TemporalRange::end)
        .max()
        .ok_or(TemporalError::EmptySeries)
}

/// `[series_start, series_end]`
pub fn series_span<I: Instant>(ranges: &[TemporalRange<I>]) -> Result<TemporalRange<I>, TemporalError> {
    Ok(TemporalRange::new(series_start(ranges)?, series_end(ranges)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::DateRange;

    fn range(s: &str) -> DateRange {
        s.parse().unwrap()
    }

    #[test]
    fn test_contiguous_in_any_order() {
        let a = range("2006-07-08/2006-09-05");
        let b = range("2006-09-06/2006-09-15");
        let c = range("2006-09-16/2006-09-25");

        assert!(is_contiguous(&[a, b, c]));
        assert!(is_contiguous(&[c, a, b]));
        assert!(is_contiguous(&[b, c, a]));
    }

    #[test]
    fn test_boundary_overlap_breaks_contiguity() {
        let a = range("2006-07-08/2006-09-05");
        let b = range("2006-09-06/2006-09-15");
        let c = range("2006-09-15/2006-09-25");

        assert!(!is_contiguous(&[a, b, c]));
    }

    #[test]
    fn test_trivial_series_are_contiguous() {
        assert!(is_contiguous::<chrono::NaiveDate>(&[]));
        assert!(is_contiguous(&[range("2006-07-08/2006-09-05")]));
    }

    #[test]
    fn test_caller_order_is_preserved() {
        let ranges = vec![range("2006-09-06/2006-09-15"), range("2006-07-08/2006-09-05")];
        let before = ranges.clone();
        assert!(is_contiguous(&ranges));
        assert_eq!(ranges, before);
    }

    #[test]
    fn test_series_bounds() {
        let ranges = [range("2006-09-06/2006-09-15"), range("2006-07-08/2006-09-05")];
        assert_eq!(series_span(&ranges).unwrap(), range("2006-07-08/2006-09-15"));
    }

    #[test]
    fn test_empty_series_fails_fast() {
        let empty: [DateRange; 0] = [];
        assert_eq!(series_start(&empty), Err(TemporalError::EmptySeries));
        assert_eq!(series_end(&empty), Err(TemporalError::EmptySeries));
    }
}
