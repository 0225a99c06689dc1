//! Builds the merged station/gridMET input table used by the rest of the
//! bias-correction workflow.

use crate::error::GridwxcompError;
use crate::matching::locate_cell::GridCellLocator;
use crate::tables::csv_io::{read_csv, write_csv};
use crate::tables::gridmet_table::{self, grid_cells_from_frame};
use crate::tables::merged_table::{self, merged_frame};
use crate::tables::station_table::stations_from_frame;
use crate::types::grid_spec::GridSpec;
use crate::types::matched_station::MatchReport;
use bon::builder;
use log::info;
use polars::prelude::DataFrame;
use std::path::Path;

/// Matches every station in `stations` to its nearest cell in `gridmet_cells` and
/// returns the merged table together with the full match report.
///
/// Both frames use the column names of the station list and cell metadata files (see
/// [`crate::tables::station_table`] and [`crate::tables::gridmet_table`]).
pub fn join_station_to_gridmet(
    stations: &DataFrame,
    gridmet_cells: &DataFrame,
    grid_spec: GridSpec,
) -> Result<(DataFrame, MatchReport), GridwxcompError> {
    let stations = stations_from_frame(stations)?;
    let cells = grid_cells_from_frame(gridmet_cells)?;
    let locator = GridCellLocator::new(cells, grid_spec);
    let report = locator.match_stations(&stations);
    let merged = merged_frame(&report)?;
    Ok((merged, report))
}

/// Reads the station list and gridMET cell metadata, matches each station with its
/// nearest gridMET cell and writes the merged table as CSV.
///
/// This function uses a builder pattern.
///
/// # Arguments
///
/// * `.station_file(&Path)`: **Required.** CSV list of climate stations.
/// * `.gridmet_file(&Path)`: Optional. gridMET cell metadata CSV. Defaults to
///   `gridmet_cell_data.csv` in the working directory.
/// * `.out_path(&Path)`: Optional. Where to write the merged CSV. Defaults to
///   `merged_input.csv` in the working directory.
/// * `.grid_spec(GridSpec)`: Optional. Grid geometry used for centroids. Defaults to
///   [`GridSpec::GRIDMET`].
///
/// # Errors
///
/// Returns [`GridwxcompError::MissingInput`] before anything is read if either input
/// file does not exist. Table read/write failures are returned as
/// [`GridwxcompError::Table`]. Stations that cannot be matched are not errors; they
/// are listed in [`MatchReport::skipped`].
///
/// # Examples
///
/// ```no_run
/// # use gridwxcomp::{prep_input, GridwxcompError};
/// # use std::path::Path;
/// # fn main() -> Result<(), GridwxcompError> {
/// let report = prep_input()
///     .station_file(Path::new("stations.csv"))
///     .gridmet_file(Path::new("gridmet_cell_data.csv"))
///     .call()?;
/// println!("{} stations matched", report.matched.len());
/// # Ok(())
/// # }
/// ```
#[builder]
pub fn prep_input(
    station_file: &Path,
    gridmet_file: Option<&Path>,
    out_path: Option<&Path>,
    grid_spec: Option<GridSpec>,
) -> Result<MatchReport, GridwxcompError> {
    let gridmet_file = gridmet_file.unwrap_or(Path::new(gridmet_table::DEFAULT_FILE_NAME));
    let out_path = out_path.unwrap_or(Path::new(merged_table::DEFAULT_FILE_NAME));
    let grid_spec = grid_spec.unwrap_or_default();

    for input in [station_file, gridmet_file] {
        if !input.exists() {
            return Err(GridwxcompError::MissingInput(input.to_path_buf()));
        }
    }

    info!("Station list CSV: {}", station_file.display());
    info!("gridMET cell info CSV: {}", gridmet_file.display());
    info!("Merged CSV will be saved to: {}", out_path.display());

    let stations = read_csv(station_file)?;
    let gridmet_cells = read_csv(gridmet_file)?;
    let (mut merged, report) = join_station_to_gridmet(&stations, &gridmet_cells, grid_spec)?;

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| GridwxcompError::OutputDirCreation(parent.to_path_buf(), e))?;
    }
    write_csv(&mut merged, out_path)?;
    info!(
        "Wrote {} merged rows to {} ({} stations skipped)",
        merged.height(),
        out_path.display(),
        report.skipped.len()
    );
    Ok(report)
}
