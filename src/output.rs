//! Console and CSV rendering for the `report` subcommand.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

use crate::analyzers::types::DailyStatistics;
use crate::dataset::CaseTable;
use csv::WriterBuilder;

/// One line of the daily statistics CSV export.
#[derive(Debug, Serialize)]
struct DailyRow<'a> {
    date: &'a str,
    new_cases: i64,
    total_cases: i64,
    growth_rate: f64,
}

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logs the first `n` rows of the table.
pub fn print_head(table: &CaseTable, n: usize) {
    for (idx, r) in table.records().iter().take(n).enumerate() {
        info!(
            row = idx,
            report_date = %r.report_date,
            region = %r.region_name,
            new_cases = r.new_cases,
            cumulative_cases = r.cumulative_cases,
            "Case row"
        );
    }
}

/// Writes daily statistics to `path` as CSV, replacing any existing file.
pub fn write_daily_csv(path: &str, stats: &DailyStatistics) -> Result<()> {
    debug!(path, rows = stats.dates.len(), "Writing daily statistics CSV");

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;

    for (i, date) in stats.dates.iter().enumerate() {
        writer.serialize(DailyRow {
            date,
            new_cases: stats.new_cases[i],
            total_cases: stats.total_cases[i],
            growth_rate: stats.growth_rates[i],
        })?;
    }
    writer.flush()?;

    Ok(())
}
