//! Loading the district case table from its spreadsheet source.
//!
//! The published dataset is an Excel workbook with Chinese column headers.
//! CSV exports are read as well, and English header aliases are accepted in
//! both formats so hand-made fixtures stay readable.

mod workbook;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Header names, native first, then the accepted alias.
const REQUIRED_COLUMNS: [(&str, &str); 4] = [
    ("报告日期", "report_date"),
    ("地区名称", "region_name"),
    ("新增确诊", "new_cases"),
    ("累计确诊", "cumulative_cases"),
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub report_date: NaiveDate,
    pub region_name: String,
    pub new_cases: i64,
    pub cumulative_cases: i64,
}

impl CaseRecord {
    pub fn new(
        report_date: NaiveDate,
        region_name: &str,
        new_cases: i64,
        cumulative_cases: i64,
    ) -> Self {
        Self {
            report_date,
            region_name: region_name.to_string(),
            new_cases,
            cumulative_cases,
        }
    }
}

/// A row as it appears in the CSV, before the date is parsed.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "报告日期", alias = "report_date")]
    report_date: String,
    #[serde(rename = "地区名称", alias = "region_name")]
    region_name: String,
    #[serde(rename = "新增确诊", alias = "new_cases")]
    new_cases: i64,
    #[serde(rename = "累计确诊", alias = "cumulative_cases")]
    cumulative_cases: i64,
}

/// All rows of the dataset, in file order.
#[derive(Debug, Clone, Default)]
pub struct CaseTable {
    records: Vec<CaseRecord>,
}

impl CaseTable {
    pub fn from_records(records: Vec<CaseRecord>) -> Self {
        Self { records }
    }

    /// Parses a CSV document with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| DataError::Malformed(format!("failed to read header row: {e}")))?
            .clone();

        column_indices(headers.iter())?;

        let mut records = Vec::new();

        for (idx, result) in rdr.deserialize::<RawRecord>().enumerate() {
            let row = idx + 1;
            let raw = result.map_err(|e| DataError::Malformed(format!("row {row}: {e}")))?;

            let report_date = parse_report_date(&raw.report_date).ok_or_else(|| {
                DataError::Malformed(format!("row {row}: invalid date '{}'", raw.report_date))
            })?;

            records.push(CaseRecord {
                report_date,
                region_name: raw.region_name,
                new_cases: raw.new_cases,
                cumulative_cases: raw.cumulative_cases,
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.report_date).max()
    }

    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.report_date).min()
    }

    /// Rows whose date equals the latest date in the table.
    pub fn latest_records(&self) -> impl Iterator<Item = &CaseRecord> {
        let latest = self.latest_date();
        self.records
            .iter()
            .filter(move |r| Some(r.report_date) == latest)
    }

    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.records.iter().map(|r| r.report_date).collect()
    }

    pub fn regions(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.region_name.as_str()).collect()
    }
}

/// Location of the case table on disk. Every call to [`CaseSource::load`]
/// reads the file again.
#[derive(Debug, Clone)]
pub struct CaseSource {
    path: PathBuf,
}

impl CaseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> DataResult<CaseTable> {
        if !self.path.exists() {
            return Err(DataError::Unavailable(format!(
                "data file not found: {}",
                self.path.display()
            )));
        }

        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let table = match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => {
                workbook::read_workbook(&self.path)?
            }
            Some("csv") | None => {
                let file = File::open(&self.path).map_err(|e| {
                    DataError::Unavailable(format!("failed to open {}: {e}", self.path.display()))
                })?;
                CaseTable::from_csv_reader(file)?
            }
            Some(ext) => {
                return Err(DataError::Malformed(format!(
                    "unsupported data file extension: {ext}"
                )));
            }
        };
        debug!(rows = table.len(), "Case table loaded");

        Ok(table)
    }
}

/// Positions of the required columns in a header row, in
/// [`REQUIRED_COLUMNS`] order.
fn column_indices<'a>(headers: impl IntoIterator<Item = &'a str>) -> DataResult<[usize; 4]> {
    let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
    let mut indices = [0; 4];

    for (slot, (native, alias)) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| *h == native || *h == alias)
            .ok_or_else(|| DataError::Malformed(format!("missing column: {native}")))?;
    }

    Ok(indices)
}

/// Accepts a bare date or a date-time; the time component is dropped.
fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                .map(|dt| dt.date())
        })
}
