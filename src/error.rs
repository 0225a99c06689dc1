use crate::comparison::error::ComparisonError;
use crate::matching::error::MatchError;
use crate::tables::error::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridwxcompError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error("Input file '{0}' does not exist")]
    MissingInput(PathBuf),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),
}
