//! Word-count report built from a review snapshot.
//!
//! Comments are grouped per (user, pull request) by [`aggregate`], pivoted
//! into a [`Grid`], and rendered with [`write_csv`].

mod aggregate;
mod csv;
mod grid;

pub use aggregate::{AggregatedRow, aggregate, count_words};
pub use csv::{USER_COLUMN, write_csv};
pub use grid::Grid;

use tracing::{info, warn};

use crate::github::IntakeError;
use crate::source::{ReviewSnapshot, ReviewSource};

/// Builds the grid for an already loaded snapshot.
#[must_use]
pub fn tally(snapshot: &ReviewSnapshot) -> Grid {
    let rows = aggregate(&snapshot.comments);
    Grid::pivot(&rows, &snapshot.pull_requests)
}

/// Loads a snapshot from `source` and builds its grid.
///
/// # Errors
///
/// Propagates any failure from the source.
pub async fn build_report(source: &dyn ReviewSource) -> Result<Grid, IntakeError> {
    let snapshot = source.load().await?;
    let grid = tally(&snapshot);
    if grid.is_empty() {
        warn!(
            pull_requests = grid.columns().len(),
            "no review comments survived filtering; the grid has no rows"
        );
    }
    info!(
        users = grid.users().count(),
        pull_requests = grid.columns().len(),
        "built participation grid"
    );
    Ok(grid)
}
