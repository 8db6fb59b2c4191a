use crate::analyzers::types::Summary;
use crate::analyzers::utility::{add_count, format_date};
use crate::dataset::CaseTable;
use crate::error::{DataError, DataResult};

/// Whole-table totals plus the totals of the latest report date.
///
/// # Errors
///
/// Returns [`DataError::Malformed`] if the table has no rows, since there is
/// no date range to report, or if a total overflows.
pub fn summary(table: &CaseTable) -> DataResult<Summary> {
    let (Some(start), Some(end)) = (table.earliest_date(), table.latest_date()) else {
        return Err(DataError::Malformed("dataset contains no rows".into()));
    };

    let records = table.records();
    let total_new_cases = records
        .iter()
        .try_fold(0, |total, r| add_count(total, r.new_cases))?;
    let max_total_cases = records.iter().map(|r| r.cumulative_cases).max().unwrap_or(0);

    let (latest_new_cases, latest_total_cases) = table
        .latest_records()
        .try_fold((0, 0), |(n, c), r| {
            DataResult::Ok((add_count(n, r.new_cases)?, add_count(c, r.cumulative_cases)?))
        })?;

    Ok(Summary {
        total_new_cases,
        max_total_cases,
        date_range_start: format_date(start),
        date_range_end: format_date(end),
        total_days: table.dates().len(),
        latest_date: format_date(end),
        latest_new_cases,
        latest_total_cases,
    })
}
