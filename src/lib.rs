mod comparison;
mod error;
mod matching;
mod prep_input;
pub mod tables;
mod types;

pub use error::GridwxcompError;
pub use prep_input::*;

pub use matching::error::MatchError;
pub use matching::locate_cell::GridCellLocator;

pub use comparison::daily_comparison::*;
pub use comparison::error::ComparisonError;
pub use comparison::variable::{dew_point_c, ComparisonVariable};

pub use types::daily::{GridmetDay, StationDay};
pub use types::grid_cell::{GridCell, GridCentroid};
pub use types::grid_spec::GridSpec;
pub use types::lat_lon::LatLon;
pub use types::matched_station::{MatchReport, MatchedStation, SkippedStation};
pub use types::station::Station;

pub use tables::error::TableError;
