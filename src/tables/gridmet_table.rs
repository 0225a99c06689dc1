//! Conversion of the gridMET cell metadata into [`GridCell`] records.

use crate::tables::csv_io::{float_values, int_values, required};
use crate::tables::error::TableError;
use crate::types::grid_cell::GridCell;
use polars::prelude::DataFrame;

const TABLE: &str = "gridMET cell";

pub const GRIDMET_ID: &str = "GRIDMET_ID";
pub const LATITUDE: &str = "LAT";
pub const LONGITUDE: &str = "LON";
pub const ELEVATION: &str = "ELEV_M";

/// Default file name of the gridMET cell metadata, looked up in the working directory.
pub const DEFAULT_FILE_NAME: &str = "gridmet_cell_data.csv";

/// Builds grid cell records from the cell metadata frame, keeping row order.
///
/// The cell metadata is reference data, so a null id or corner coordinate is an error
/// rather than a skipped row. Elevation may be null.
pub fn grid_cells_from_frame(df: &DataFrame) -> Result<Vec<GridCell>, TableError> {
    let ids = int_values(df, TABLE, GRIDMET_ID)?;
    let latitudes = float_values(df, TABLE, LATITUDE)?;
    let longitudes = float_values(df, TABLE, LONGITUDE)?;
    let elevations = float_values(df, TABLE, ELEVATION)?;

    ids.into_iter()
        .zip(latitudes)
        .zip(longitudes)
        .zip(elevations)
        .enumerate()
        .map(|(row, (((id, latitude), longitude), elevation_m))| {
            Ok(GridCell {
                gridmet_id: required(id, TABLE, GRIDMET_ID, row)?,
                latitude: required(latitude, TABLE, LATITUDE, row)?,
                longitude: required(longitude, TABLE, LONGITUDE, row)?,
                elevation_m,
            })
        })
        .collect()
}
