//! Grid geometry shared by every cell of a regular latitude/longitude lattice,
//! and the corner-to-centroid transform built on it.

use crate::types::lat_lon::LatLon;
use serde::{Deserialize, Serialize};

/// Immutable description of a regular grid: its origin and its uniform cell size.
///
/// The origin is the lower-left corner of the lower-left cell. All values are in
/// decimal degrees.
///
/// # Examples
///
/// ```
/// use gridwxcomp::GridSpec;
///
/// let spec = GridSpec::GRIDMET;
/// let centroid = spec.centroid(spec.origin_lat, spec.origin_lon);
/// assert!((centroid.0 - (spec.origin_lat + spec.cell_size / 2.0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Latitude of the grid's lower-left corner.
    pub origin_lat: f64,
    /// Longitude of the grid's lower-left corner.
    pub origin_lon: f64,
    /// Edge length of one (square) cell.
    pub cell_size: f64,
}

impl GridSpec {
    /// The CONUS gridMET lattice (1/24 degree cells).
    pub const GRIDMET: GridSpec = GridSpec {
        origin_lat: 25.04583333333334,
        origin_lon: -124.78749996666667,
        cell_size: 0.041666666666666664,
    };

    /// Creates a grid with its lower-left corner at (`origin_lat`, `origin_lon`) and
    /// square cells of `cell_size` degrees.
    pub fn new(origin_lat: f64, origin_lon: f64, cell_size: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
            cell_size,
        }
    }

    /// Computes the centroid of the cell whose lower-left corner is at (`lat`, `lon`).
    ///
    /// For each axis the number of whole cells between the origin and the corner is
    /// found by truncating `|coordinate - origin| / cell_size`, and the centroid is placed
    /// half a cell past the corner of that lattice cell.
    ///
    /// No validation is done. A corner that is not on the lattice yields the centroid of
    /// the cell picked by truncation, and a corner south or west of the origin is mirrored
    /// to the other side of it because of the absolute difference. Corners are not snapped
    /// to the lattice, so one that sits a rounding error below a lattice line truncates to
    /// the cell beneath it.
    pub fn centroid(&self, lat: f64, lon: f64) -> LatLon {
        LatLon(
            self.axis_centroid(lat, self.origin_lat),
            self.axis_centroid(lon, self.origin_lon),
        )
    }

    fn axis_centroid(&self, coordinate: f64, origin: f64) -> f64 {
        let steps = ((coordinate - origin).abs() / self.cell_size).trunc();
        steps * self.cell_size + origin + self.cell_size / 2.0
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::GRIDMET
    }
}
