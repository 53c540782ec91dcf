//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use proptest::prelude::*;
use value_kernel::{Currency, DateRange, DateTimeRange, Instant, IpAddress, MacAddress, Money};

fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Strategy for generating dates between 2000 and roughly 2054
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000i64).prop_map(|days| epoch_date() + Duration::days(days))
}

/// Strategy for generating second-precision timestamps with whole-hour offsets
pub fn datetime_strategy() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (0i64..1_000_000_000i64, -12i32..=14i32).prop_map(|(seconds, hours)| {
        let utc = epoch_date().and_time(NaiveTime::MIN).and_utc().fixed_offset()
            + Duration::seconds(seconds);
        let offset = FixedOffset::east_opt(hours * 3600).unwrap();
        utc.with_timezone(&offset)
    })
}

/// Strategy for generating non-empty date ranges
pub fn date_range_strategy() -> impl Strategy<Value = DateRange> {
    (date_strategy(), 0i64..400i64)
        .prop_map(|(start, days)| DateRange::new(start, start + Duration::days(days)))
}

/// Strategy for generating date ranges with reversed bounds
pub fn empty_date_range_strategy() -> impl Strategy<Value = DateRange> {
    (date_strategy(), 1i64..400i64)
        .prop_map(|(end, days)| DateRange::new(end + Duration::days(days), end))
}

/// Strategy for generating non-empty date-time ranges
pub fn datetime_range_strategy() -> impl Strategy<Value = DateTimeRange> {
    (datetime_strategy(), 0i64..10_000_000i64)
        .prop_map(|(start, seconds)| DateTimeRange::new(start, start + Duration::seconds(seconds)))
}

/// Strategy for generating a shuffled series of abutting date ranges
pub fn contiguous_series_strategy() -> impl Strategy<Value = Vec<DateRange>> {
    (date_strategy(), proptest::collection::vec(1i64..60i64, 1..8))
        .prop_map(|(first, lengths)| {
            let mut start = first;
            lengths
                .into_iter()
                .map(|days| {
                    let range = DateRange::new(start, start + Duration::days(days - 1));
                    start = range.end().next_unit();
                    range
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::SEK),
        Just(Currency::AUD),
        Just(Currency::CAD),
    ]
}

/// Strategy for generating Money values (can be negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000i64, currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating IPv4 and IPv6 addresses
pub fn ip_address_strategy() -> impl Strategy<Value = IpAddress> {
    prop_oneof![
        any::<[u8; 4]>().prop_map(|bytes| IpAddress::from_bytes(&bytes).unwrap()),
        any::<[u8; 16]>().prop_map(|bytes| IpAddress::from_bytes(&bytes).unwrap()),
    ]
}

/// Strategy for generating MAC addresses
pub fn mac_address_strategy() -> impl Strategy<Value = MacAddress> {
    any::<[u8; 6]>().prop_map(MacAddress::new)
}
