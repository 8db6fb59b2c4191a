use std::collections::HashMap;

use chrono::NaiveDate;

use crate::analyzers::types::RegionDaily;
use crate::analyzers::utility::{add_count, format_date};
use crate::dataset::CaseTable;
use crate::error::DataResult;

/// Builds the full `dates × regions` grid of new cases.
///
/// Every combination of a distinct date and a distinct region gets an entry;
/// combinations with no rows are filled with 0. Output is date-major, with
/// dates and regions both ascending. Fails with
/// [`DataError::Malformed`](crate::error::DataError::Malformed) if a cell sum
/// overflows.
pub fn region_daily(table: &CaseTable) -> DataResult<RegionDaily> {
    let mut cells: HashMap<(NaiveDate, &str), i64> = HashMap::new();

    for r in table.records() {
        let cell = cells
            .entry((r.report_date, r.region_name.as_str()))
            .or_default();
        *cell = add_count(*cell, r.new_cases)?;
    }

    let dates = table.dates();
    let regions = table.regions();

    let mut data = Vec::with_capacity(dates.len() * regions.len());

    for &date in &dates {
        let date_str = format_date(date);
        for &region in &regions {
            let value = cells.get(&(date, region)).copied().unwrap_or(0);
            data.push((region.to_string(), date_str.clone(), value));
        }
    }

    Ok(RegionDaily {
        dates: dates.into_iter().map(format_date).collect(),
        regions: regions.into_iter().map(str::to_string).collect(),
        data,
    })
}
