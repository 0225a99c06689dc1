use crate::tables::error::TableError;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Reads a CSV file with a header row into a `DataFrame`.
pub fn read_csv(path: &Path) -> Result<DataFrame, TableError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| TableError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| TableError::CsvRead(path.to_path_buf(), e))
}

/// Writes `df` to `path` as CSV with a header row, replacing any existing file.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), TableError> {
    let mut file =
        File::create(path).map_err(|e| TableError::CsvCreate(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| TableError::CsvWrite(path.to_path_buf(), e))
}

fn cast_column(
    df: &DataFrame,
    table: &'static str,
    column: &'static str,
    dtype: &DataType,
) -> Result<Column, TableError> {
    df.column(column)
        .map_err(|source| TableError::MissingColumn {
            table,
            column,
            source,
        })?
        .cast(dtype)
        .map_err(TableError::from)
}

pub(crate) fn float_values(
    df: &DataFrame,
    table: &'static str,
    column: &'static str,
) -> Result<Vec<Option<f64>>, TableError> {
    let values = cast_column(df, table, column, &DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

pub(crate) fn int_values(
    df: &DataFrame,
    table: &'static str,
    column: &'static str,
) -> Result<Vec<Option<i64>>, TableError> {
    let values = cast_column(df, table, column, &DataType::Int64)?;
    Ok(values.i64()?.into_iter().collect())
}

pub(crate) fn string_values(
    df: &DataFrame,
    table: &'static str,
    column: &'static str,
) -> Result<Vec<Option<String>>, TableError> {
    let values = cast_column(df, table, column, &DataType::String)?;
    Ok(values
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Unwraps a value from a column where nulls are not allowed.
pub(crate) fn required<T>(
    value: Option<T>,
    table: &'static str,
    column: &'static str,
    row: usize,
) -> Result<T, TableError> {
    value.ok_or(TableError::NullValue { table, column, row })
}
