//! Conversion of the climate station list into [`Station`] records.

use crate::tables::csv_io::{float_values, required, string_values};
use crate::tables::error::TableError;
use crate::types::station::Station;
use log::warn;
use polars::prelude::DataFrame;

const TABLE: &str = "station";

pub const FID: &str = "FID";
pub const LATITUDE: &str = "LATDECDEG";
pub const LONGITUDE: &str = "LONGDECDEG";
pub const ELEVATION: &str = "Elev_m";
pub const FILE_NAME: &str = "FileName";

/// Builds station records from a station list frame.
///
/// Only `FID`, `LATDECDEG`, `LONGDECDEG`, `Elev_m` and `FileName` are read; any other
/// column is ignored. A missing latitude or longitude is kept as NaN so the station
/// is reported as skipped by the matcher. A missing `FID` is an error.
pub fn stations_from_frame(df: &DataFrame) -> Result<Vec<Station>, TableError> {
    let fids = string_values(df, TABLE, FID)?;
    let latitudes = float_values(df, TABLE, LATITUDE)?;
    let longitudes = float_values(df, TABLE, LONGITUDE)?;
    let elevations = float_values(df, TABLE, ELEVATION)?;
    let file_names = string_values(df, TABLE, FILE_NAME)?;

    fids.into_iter()
        .zip(latitudes)
        .zip(longitudes)
        .zip(elevations)
        .zip(file_names)
        .enumerate()
        .map(|(row, ((((fid, latitude), longitude), elevation_m), file_name))| {
            let fid = required(fid, TABLE, FID, row)?;
            if latitude.is_none() || longitude.is_none() {
                warn!("Station {} has no coordinates in row {}", fid, row);
            }
            Ok(Station {
                fid,
                latitude: latitude.unwrap_or(f64::NAN),
                longitude: longitude.unwrap_or(f64::NAN),
                elevation_m,
                file_path: file_name.unwrap_or_default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_reads_station_columns_and_ignores_others() -> Result<(), TableError> {
        let df = df!(
            "FID" => [1i64, 2],
            "Station" => ["Reno", "Elko"],
            "LATDECDEG" => [39.5, 40.8],
            "LONGDECDEG" => [-119.8, -115.7],
            "Elev_m" => [Some(1373.0), None],
            "FileName" => ["Reno_output.xlsx", "Elko_output.xlsx"]
        )?;

        let stations = stations_from_frame(&df)?;
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].fid, "1");
        assert_eq!(stations[0].latitude, 39.5);
        assert_eq!(stations[0].longitude, -119.8);
        assert_eq!(stations[0].elevation_m, Some(1373.0));
        assert_eq!(stations[0].file_path, "Reno_output.xlsx");
        assert_eq!(stations[1].elevation_m, None);
        Ok(())
    }

    #[test]
    fn test_missing_coordinate_becomes_nan() -> Result<(), TableError> {
        let df = df!(
            "FID" => ["A", "B"],
            "LATDECDEG" => [Some(39.5), None],
            "LONGDECDEG" => [-119.8, -115.7],
            "Elev_m" => [1373.0, 1547.0],
            "FileName" => ["a.csv", "b.csv"]
        )?;

        let stations = stations_from_frame(&df)?;
        assert!(stations[0].latitude.is_finite());
        assert!(stations[1].latitude.is_nan());
        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() -> Result<(), PolarsError> {
        let df = df!(
            "FID" => ["A"],
            "LATDECDEG" => [39.5],
            "Elev_m" => [1373.0],
            "FileName" => ["a.csv"]
        )?;

        let err = stations_from_frame(&df).unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingColumn {
                column: LONGITUDE,
                ..
            }
        ));
        Ok(())
    }
}
