pub mod error;
pub mod locate_cell;
