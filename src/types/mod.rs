pub mod daily;
pub mod grid_cell;
pub mod grid_spec;
pub mod lat_lon;
pub mod matched_station;
pub mod station;
