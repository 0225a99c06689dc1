//! Results of matching stations to grid cells.

use crate::matching::error::MatchError;
use crate::types::grid_cell::GridCell;
use crate::types::station::Station;

/// A station joined with the grid cell whose centroid is closest to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedStation {
    pub station: Station,
    pub cell: GridCell,
    /// Great-circle distance between the station and the cell centroid. Diagnostic only;
    /// the match itself is decided on planar (lat, lon) distance.
    pub distance_km: f64,
}

/// A station that could not be matched, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStation {
    pub fid: String,
    pub reason: MatchError,
}

/// Outcome of matching a batch of stations.
///
/// `matched` keeps the order of the input stations. Every input station ends up in
/// exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchReport {
    pub matched: Vec<MatchedStation>,
    pub skipped: Vec<SkippedStation>,
}

impl MatchReport {
    /// Number of input stations, matched or skipped.
    pub fn len(&self) -> usize {
        self.matched.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.skipped.is_empty()
    }
}
