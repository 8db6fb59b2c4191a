use calamine::{Data, Reader, open_workbook_auto};
use chrono::{Days, NaiveDate};
use std::path::Path;

use super::{CaseRecord, CaseTable, column_indices, parse_report_date};
use crate::error::{DataError, DataResult};

static EMPTY: Data = Data::Empty;

/// Reads the first worksheet of an Excel or OpenDocument workbook. The first
/// row holds the headers.
pub(super) fn read_workbook(path: &Path) -> DataResult<CaseTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        DataError::Malformed(format!("failed to open workbook {}: {e}", path.display()))
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| DataError::Malformed("workbook has no sheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| DataError::Malformed(format!("failed to read sheet '{sheet_name}': {e}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| DataError::Malformed("sheet has no header row".into()))?
        .iter()
        .map(text_cell)
        .collect();
    let [date_col, region_col, new_col, total_col] =
        column_indices(headers.iter().map(String::as_str))?;

    let mut records = Vec::new();

    for (idx, cells) in rows.enumerate() {
        let row = idx + 1;
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let cell = |col: usize| cells.get(col).unwrap_or(&EMPTY);
        let malformed =
            |what: &str, c: &Data| DataError::Malformed(format!("row {row}: invalid {what} '{c}'"));

        let report_date =
            date_cell(cell(date_col)).ok_or_else(|| malformed("date", cell(date_col)))?;
        let region_name = text_cell(cell(region_col));
        if region_name.is_empty() {
            return Err(DataError::Malformed(format!("row {row}: empty region name")));
        }
        let new_cases =
            count_cell(cell(new_col)).ok_or_else(|| malformed("count", cell(new_col)))?;
        let cumulative_cases =
            count_cell(cell(total_col)).ok_or_else(|| malformed("count", cell(total_col)))?;

        records.push(CaseRecord {
            report_date,
            region_name,
            new_cases,
            cumulative_cases,
        });
    }

    Ok(CaseTable::from_records(records))
}

fn text_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Date cells hold a day serial; some exports store the date as text.
fn date_cell(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => from_serial(dt.as_f64()),
        Data::Float(f) => from_serial(*f),
        Data::Int(i) => from_serial(*i as f64),
        Data::String(s) | Data::DateTimeIso(s) => parse_report_date(s.trim()),
        _ => None,
    }
}

/// Converts an Excel 1900-system serial to a date, ignoring the time of day.
fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    // Day 0 is 1899-12-30 for every serial past the phantom 1900-02-29.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.floor() as u64))
}

fn count_cell(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
