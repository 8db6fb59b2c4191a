//! Per-district totals on the latest report date.

use std::collections::BTreeMap;

use crate::analyzers::types::{MapData, MapEntry, RegionStatistics};
use crate::analyzers::utility::add_count;
use crate::dataset::CaseTable;
use crate::error::DataResult;
use crate::regions::{name_map, resolve};

/// Sums cumulative cases per district over the rows of the latest date,
/// keyed by native name in ascending order.
fn latest_totals(table: &CaseTable) -> DataResult<BTreeMap<&str, i64>> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();

    for r in table.latest_records() {
        let total = totals.entry(r.region_name.as_str()).or_default();
        *total = add_count(*total, r.cumulative_cases)?;
    }

    Ok(totals)
}

/// Districts ordered by cumulative cases, largest first. Ties keep ascending
/// native-name order.
pub fn region_statistics(table: &CaseTable) -> DataResult<RegionStatistics> {
    let mut totals: Vec<(&str, i64)> = latest_totals(table)?.into_iter().collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let (regions, cases): (Vec<String>, Vec<i64>) = totals
        .into_iter()
        .map(|(region, total)| (region.to_string(), total))
        .unzip();

    Ok(RegionStatistics { regions, cases })
}

/// Latest cumulative totals annotated with display names for the map view.
pub fn map_data(table: &CaseTable) -> DataResult<MapData> {
    let data = latest_totals(table)?
        .into_iter()
        .map(|(native, total)| MapEntry {
            name: resolve(native).to_string(),
            chinese_name: native.to_string(),
            value: total,
        })
        .collect();

    Ok(MapData {
        data,
        name_map: name_map(),
    })
}
