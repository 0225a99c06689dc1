pub mod csv_io;
pub mod daily_table;
pub mod error;
pub mod gridmet_table;
pub mod merged_table;
pub mod station_table;
