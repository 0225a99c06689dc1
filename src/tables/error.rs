use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read CSV file '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Failed to create output file '{0}'")]
    CsvCreate(PathBuf, #[source] std::io::Error),

    #[error("Failed to write CSV file '{0}'")]
    CsvWrite(PathBuf, #[source] PolarsError),

    #[error("Required column '{column}' not found in {table} table")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Null value in column '{column}' at row {row} of {table} table")]
    NullValue {
        table: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("Invalid date '{value}' at row {row} of {table} table")]
    InvalidDate {
        table: &'static str,
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
