//! Defines gridMET cell metadata and the derived cell centroids, including the
//! implementations needed to index centroids with the `rstar` crate.

use crate::types::grid_spec::GridSpec;
use crate::types::lat_lon::LatLon;
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// One cell of the gridMET lattice as listed in the cell metadata file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GridCell {
    /// The `GRIDMET_ID` of the cell.
    pub gridmet_id: i64,
    /// Latitude of the cell's lower-left corner.
    pub latitude: f64,
    /// Longitude of the cell's lower-left corner.
    pub longitude: f64,
    /// Cell elevation in meters, if known.
    pub elevation_m: Option<f64>,
}

/// The center point of a [`GridCell`], used as its location for distance comparisons.
///
/// `index` is the position of the source cell in the order the cells were given,
/// so a centroid can always be traced back to exactly one cell record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCentroid {
    /// Position of the source cell in the cell list.
    pub index: usize,
    /// The `GRIDMET_ID` of the source cell.
    pub gridmet_id: i64,
    /// Centroid coordinates (lat, lon).
    pub location: LatLon,
}

impl GridCentroid {
    pub fn from_cell(index: usize, cell: &GridCell, spec: &GridSpec) -> Self {
        Self {
            index,
            gridmet_id: cell.gridmet_id,
            location: spec.centroid(cell.latitude, cell.longitude),
        }
    }
}

// --- R-Tree Implementations ---

/// A centroid is a point, so its envelope is the degenerate box around (lat, lon).
impl RTreeObject for GridCentroid {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.location.0, self.location.1])
    }
}

impl PointDistance for GridCentroid {
    /// Squared planar distance in (lat, lon) degrees. No geodesic correction; fine for
    /// ~4 km cells inside CONUS.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d_lat = self.location.0 - point[0];
        let d_lon = self.location.1 - point[1];
        d_lat * d_lat + d_lon * d_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_keeps_cell_identity() {
        let spec = GridSpec::new(0.0, 0.0, 1.0);
        let cell = GridCell {
            gridmet_id: 42,
            latitude: 3.0,
            longitude: 7.0,
            elevation_m: Some(1200.0),
        };
        let centroid = GridCentroid::from_cell(5, &cell, &spec);
        assert_eq!(centroid.index, 5);
        assert_eq!(centroid.gridmet_id, 42);
        assert_eq!(centroid.location, LatLon(3.5, 7.5));
    }

    #[test]
    fn test_distance_is_squared_euclidean() {
        let centroid = GridCentroid {
            index: 0,
            gridmet_id: 0,
            location: LatLon(1.0, 1.0),
        };
        assert_eq!(centroid.distance_2(&[4.0, 5.0]), 25.0);
        assert_eq!(centroid.envelope(), AABB::from_point([1.0, 1.0]));
    }
}
