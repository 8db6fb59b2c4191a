//! Response shapes produced by the aggregation queries.

use serde::Serialize;
use std::collections::BTreeMap;

/// Totals per report date across all districts.
#[derive(Debug, Default, Serialize)]
pub struct DailyStatistics {
    pub dates: Vec<String>,
    pub new_cases: Vec<i64>,
    pub total_cases: Vec<i64>,
    pub growth_rates: Vec<f64>,
}

/// Cumulative cases per district on the latest report date, largest first.
#[derive(Debug, Default, Serialize)]
pub struct RegionStatistics {
    pub regions: Vec<String>,
    pub cases: Vec<i64>,
}

/// Dense `dates × regions` matrix of new cases, for the heatmap.
#[derive(Debug, Default, Serialize)]
pub struct RegionDaily {
    pub dates: Vec<String>,
    pub regions: Vec<String>,
    /// `[region, date, value]` triples, date-major.
    pub data: Vec<(String, String, i64)>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MapEntry {
    /// Display name, matching the boundary file's region keys.
    pub name: String,
    #[serde(rename = "chineseName")]
    pub chinese_name: String,
    pub value: i64,
}

#[derive(Debug, Default, Serialize)]
pub struct MapData {
    pub data: Vec<MapEntry>,
    #[serde(rename = "nameMap")]
    pub name_map: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_new_cases: i64,
    pub max_total_cases: i64,
    pub date_range_start: String,
    pub date_range_end: String,
    pub total_days: usize,
    pub latest_date: String,
    pub latest_new_cases: i64,
    pub latest_total_cases: i64,
}
