use crate::matching::error::MatchError;
use crate::types::grid_cell::{GridCell, GridCentroid};
use crate::types::grid_spec::GridSpec;
use crate::types::lat_lon::LatLon;
use crate::types::matched_station::{MatchReport, MatchedStation, SkippedStation};
use crate::types::station::Station;
use haversine::{distance, Location as HaversineLocation, Units};
use log::{debug, info, warn};
use rstar::RTree;

/// Spatial index over the centroids of a set of grid cells.
///
/// The index is built once from the cell list and is read-only afterwards; each
/// station lookup is a single nearest-neighbor query against it.
#[derive(Debug, Clone)]
pub struct GridCellLocator {
    rtree: RTree<GridCentroid>,
    cells: Vec<GridCell>,
    grid_spec: GridSpec,
}

impl GridCellLocator {
    /// Computes the centroid of every cell with `grid_spec` and bulk loads them into an R*-tree.
    pub fn new(cells: Vec<GridCell>, grid_spec: GridSpec) -> Self {
        let build_start = std::time::Instant::now();
        let centroids: Vec<GridCentroid> = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| GridCentroid::from_cell(index, cell, &grid_spec))
            .collect();
        let rtree = RTree::bulk_load(centroids);
        info!(
            "Indexed {} grid cell centroids in {:?}",
            cells.len(),
            build_start.elapsed()
        );
        GridCellLocator {
            rtree,
            cells,
            grid_spec,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn grid_spec(&self) -> &GridSpec {
        &self.grid_spec
    }

    /// The cell record at `index` in the order the cells were given.
    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Finds the centroid closest to (`latitude`, `longitude`) by planar distance.
    ///
    /// When two centroids are equally close, whichever the tree reaches first wins.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Result<&GridCentroid, MatchError> {
        if !LatLon(latitude, longitude).is_finite() {
            return Err(MatchError::NonFiniteCoordinate {
                latitude,
                longitude,
            });
        }
        self.rtree
            .nearest_neighbor(&[latitude, longitude])
            .ok_or(MatchError::EmptyIndex)
    }

    /// Matches a single station and joins it with its cell's attributes.
    pub fn match_station(&self, station: &Station) -> Result<MatchedStation, MatchError> {
        let centroid = self.nearest(station.latitude, station.longitude)?;
        // Centroids are built from `self.cells`, so the index is always in range.
        let cell = self.cells[centroid.index].clone();
        let distance_km = distance(
            HaversineLocation {
                latitude: station.latitude,
                longitude: station.longitude,
            },
            HaversineLocation {
                latitude: centroid.location.0,
                longitude: centroid.location.1,
            },
            Units::Kilometers,
        );
        debug!(
            "Station {} matched to gridMET cell {} ({:.2} km)",
            station.fid, cell.gridmet_id, distance_km
        );
        Ok(MatchedStation {
            station: station.clone(),
            cell,
            distance_km,
        })
    }

    /// Matches every station to its nearest cell.
    ///
    /// A station whose query fails is logged and recorded in [`MatchReport::skipped`];
    /// the rest of the batch is still processed.
    pub fn match_stations(&self, stations: &[Station]) -> MatchReport {
        let report = stations
            .iter()
            .fold(MatchReport::default(), |mut report, station| {
                match self.match_station(station) {
                    Ok(matched) => report.matched.push(matched),
                    Err(reason) => {
                        warn!(
                            "Failed to find matching gridMET cell for station with FID = {}: {}",
                            station.fid, reason
                        );
                        report.skipped.push(SkippedStation {
                            fid: station.fid.clone(),
                            reason,
                        });
                    }
                }
                report
            });
        info!(
            "Matched {} of {} stations to gridMET cells ({} skipped)",
            report.matched.len(),
            stations.len(),
            report.skipped.len()
        );
        report
    }
}
