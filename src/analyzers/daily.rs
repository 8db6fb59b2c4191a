use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::analyzers::types::DailyStatistics;
use crate::analyzers::utility::{add_count, format_date, pct, round2};
use crate::dataset::CaseTable;
use crate::error::DataResult;

/// Sums new and cumulative cases per date and derives the daily growth rate.
///
/// The growth rate for a date is its new cases as a percentage of the
/// previous date's cumulative total. The first date, and any date following
/// a zero cumulative total, gets 0.
///
/// # Errors
///
/// Returns [`DataError::Malformed`](crate::error::DataError::Malformed) if a
/// per-date sum overflows.
pub fn daily_statistics(table: &CaseTable) -> DataResult<DailyStatistics> {
    let mut totals: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();

    for r in table.records() {
        let entry = totals.entry(r.report_date).or_default();
        entry.0 = add_count(entry.0, r.new_cases)?;
        entry.1 = add_count(entry.1, r.cumulative_cases)?;
    }

    let mut stats = DailyStatistics::default();
    let mut previous_total: Option<i64> = None;

    for (date, (new_cases, total_cases)) in totals {
        let growth = previous_total.map_or(0.0, |prev| pct(new_cases, prev));

        stats.dates.push(format_date(date));
        stats.new_cases.push(new_cases);
        stats.total_cases.push(total_cases);
        stats.growth_rates.push(round2(growth));

        previous_total = Some(total_cases);
    }

    Ok(stats)
}
