//! Aggregation
//!
//! Averages over a named field of the record list.

use crate::records::UserRecord;

/// Mean of `field` across `records`, rounded to one decimal place.
///
/// Values that do not coerce to a number (including missing keys) are
/// skipped. Returns 0 when no value is usable.
pub fn average(field: &str, records: &[UserRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|r| r.number(field))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return 0.0;
    }

    round_one_decimal(sum / count as f64)
}

/// Round half up at one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
