//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for range types that give
//! more meaningful error messages than standard assertions.

use value_kernel::temporal::{is_contiguous, Instant, TemporalRange};

/// Asserts that a range is empty
pub fn assert_range_empty<I: Instant>(range: &TemporalRange<I>) {
    assert!(
        range.is_empty(),
        "Expected empty range, got {:?}..{:?}",
        range.start(),
        range.end()
    );
}

/// Asserts that two ranges abut, in both directions
pub fn assert_abuts<I: Instant>(a: &TemporalRange<I>, b: &TemporalRange<I>) {
    assert!(a.abuts(b), "Expected {} to abut {}", a, b);
    assert!(b.abuts(a), "Expected {} to abut {} (reversed)", b, a);
}

/// Asserts that the series tiles the timeline without gaps or overlaps
///
/// On failure, reports the first sorted neighbours that do not abut.
pub fn assert_contiguous<I: Instant>(ranges: &[TemporalRange<I>]) {
    if is_contiguous(ranges) {
        return;
    }
    let mut sorted = ranges.to_vec();
    sorted.sort();
    let broken = sorted
        .windows(2)
        .find(|pair| !pair[0].abuts(&pair[1]))
        .map(|pair| format!("{} then {} (gap {:?})", pair[0], pair[1], pair[0].gap(&pair[1])))
        .unwrap_or_default();
    panic!("Expected a contiguous series, broken at {}", broken);
}

/// Asserts that `a.diff(b)` succeeds with the expected remainder
pub fn assert_diff_eq<I: Instant>(
    a: &TemporalRange<I>,
    b: &TemporalRange<I>,
    expected: &TemporalRange<I>,
) {
    match a.diff(b) {
        Ok(actual) => assert_eq!(
            &actual, expected,
            "{} minus {}: expected {}, got {}",
            a, b, expected, actual
        ),
        Err(e) => panic!("{} minus {} failed: {}", a, b, e),
    }
}
