use chrono::NaiveDate;

use crate::error::{DataError, DataResult};

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Adds a case count to a running total.
///
/// # Errors
///
/// Returns [`DataError::Malformed`] when the sum leaves the `i64` range.
pub fn add_count(total: i64, value: i64) -> DataResult<i64> {
    total
        .checked_add(value)
        .ok_or_else(|| DataError::Malformed(format!("case count overflow adding {value} to {total}")))
}

/// Percentage of `part` relative to `base`. Returns 0.0 when `base` is zero.
pub fn pct(part: i64, base: i64) -> f64 {
    if base == 0 {
        0.0
    } else {
        (part as f64 / base as f64) * 100.0
    }
}
