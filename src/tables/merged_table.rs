//! The merged station/gridMET table written after matching.
//!
//! Columns describing the gridMET cell carry no prefix; columns describing the
//! climate station are prefixed with `STATION_`.

use crate::tables::error::TableError;
use crate::types::matched_station::MatchReport;
use polars::prelude::*;

/// Output columns, in output order.
pub const MERGED_COLUMNS: [&str; 9] = [
    "GRIDMET_ID",
    "LAT",
    "LON",
    "ELEV_M",
    "FID",
    "STATION_LAT",
    "STATION_LON",
    "STATION_ELEV_M",
    "STATION_FILE_PATH",
];

/// Default file name of the merged table, written to the working directory.
pub const DEFAULT_FILE_NAME: &str = "merged_input.csv";

/// Builds the merged table with one row per matched station, in station order.
///
/// Skipped stations do not appear.
pub fn merged_frame(report: &MatchReport) -> Result<DataFrame, TableError> {
    let matched = &report.matched;
    let [gridmet_id, lat, lon, elev, fid, station_lat, station_lon, station_elev, station_file] =
        MERGED_COLUMNS;

    let df = df!(
        gridmet_id => matched.iter().map(|m| m.cell.gridmet_id).collect::<Vec<i64>>(),
        lat => matched.iter().map(|m| m.cell.latitude).collect::<Vec<f64>>(),
        lon => matched.iter().map(|m| m.cell.longitude).collect::<Vec<f64>>(),
        elev => matched.iter().map(|m| m.cell.elevation_m).collect::<Vec<Option<f64>>>(),
        fid => matched.iter().map(|m| m.station.fid.clone()).collect::<Vec<String>>(),
        station_lat => matched.iter().map(|m| m.station.latitude).collect::<Vec<f64>>(),
        station_lon => matched.iter().map(|m| m.station.longitude).collect::<Vec<f64>>(),
        station_elev => matched.iter().map(|m| m.station.elevation_m).collect::<Vec<Option<f64>>>(),
        station_file => matched.iter().map(|m| m.station.file_path.clone()).collect::<Vec<String>>()
    )?;
    Ok(df)
}
