use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Station coordinates ({latitude}, {longitude}) are not finite")]
    NonFiniteCoordinate { latitude: f64, longitude: f64 },

    #[error("Grid cell index is empty, no cell can be matched")]
    EmptyIndex,
}
