//! CSV formatter for the word-count grid.
//!
//! The grid becomes a polars frame with a `user` column followed by one
//! unsigned column per pull request number, and polars' `CsvWriter` renders
//! it. Fields are quoted only when they need it.

use std::io::Write;

use polars::prelude::{
    Column, CsvWriter, DataFrame, NamedFrom, PolarsError, SerWriter, Series,
};

use crate::github::IntakeError;

use super::grid::Grid;

/// Name of the first header cell.
pub const USER_COLUMN: &str = "user";

/// Writes `grid` as CSV with `\n` line endings.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] if the frame cannot be built or writing to
/// the output fails.
pub fn write_csv<W: Write>(writer: &mut W, grid: &Grid) -> Result<(), IntakeError> {
    let mut frame = grid_frame(grid).map_err(|error| render_error(&error))?;
    CsvWriter::new(&mut *writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .map_err(|error| render_error(&error))?;
    writer.flush().map_err(|error| IntakeError::io(&error))
}

/// Transposes the grid's rows into one series per output column.
fn grid_frame(grid: &Grid) -> Result<DataFrame, PolarsError> {
    let mut users: Vec<&str> = Vec::new();
    let mut counts: Vec<Vec<u64>> = vec![Vec::new(); grid.columns().len()];
    for (user, row) in grid.zero_filled_rows() {
        users.push(user);
        for (column, count) in counts.iter_mut().zip(row) {
            column.push(u64::try_from(count).unwrap_or(u64::MAX));
        }
    }

    let mut columns = Vec::with_capacity(counts.len() + 1);
    columns.push(Column::from(Series::new(USER_COLUMN.into(), users)));
    for (number, values) in grid.columns().iter().zip(counts) {
        columns.push(Column::from(Series::new(number.to_string().into(), values)));
    }
    DataFrame::new(columns)
}

fn render_error(error: &PolarsError) -> IntakeError {
    IntakeError::Io {
        message: format!("writing CSV failed: {error}"),
    }
}
