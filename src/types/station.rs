//! Defines the climate station record read from the station list.

use crate::types::lat_lon::LatLon;
use serde::{Deserialize, Serialize};

/// A single ground climate station.
///
/// The station list provides one of these per row. Coordinates are decimal degrees;
/// a coordinate that could not be read is stored as NaN so the station is reported
/// as skipped during matching instead of being dropped silently while loading.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// Station feature identifier (`FID`).
    pub fid: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Elevation above sea level in meters, if known.
    pub elevation_m: Option<f64>,
    /// Reference to the station's time-series file.
    pub file_path: String,
}

impl Station {
    pub fn location(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}
