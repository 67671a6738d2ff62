//! User × pull request word-count grid.

use std::collections::{BTreeMap, BTreeSet};

use crate::github::PullRequest;

use super::aggregate::AggregatedRow;

/// Word counts pivoted with users as rows and pull request numbers as columns.
///
/// Every labelled pull request has a column even when nobody commented on
/// it, columns ascend numerically, and rows are ordered by login.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    columns: Vec<u64>,
    rows: BTreeMap<String, BTreeMap<u64, usize>>,
}

impl Grid {
    /// Pivots `rows` and adds a zero column for each of `pull_requests`
    /// missing one.
    #[must_use]
    pub fn pivot(rows: &[AggregatedRow], pull_requests: &[PullRequest]) -> Self {
        let mut table: BTreeMap<String, BTreeMap<u64, usize>> = BTreeMap::new();
        let mut columns: BTreeSet<u64> = pull_requests.iter().map(|pr| pr.number).collect();

        for row in rows {
            columns.insert(row.pr_number);
            *table
                .entry(row.user.clone())
                .or_default()
                .entry(row.pr_number)
                .or_default() += row.word_count;
        }

        Self {
            columns: columns.into_iter().collect(),
            rows: table,
        }
    }

    /// Pull request numbers in ascending order.
    #[must_use]
    pub fn columns(&self) -> &[u64] {
        &self.columns
    }

    /// User logins in row order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Word count for `user` on `pr_number`, zero when absent.
    #[cfg(test)]
    pub(crate) fn cell(&self, user: &str, pr_number: u64) -> usize {
        self.rows
            .get(user)
            .and_then(|cells| cells.get(&pr_number))
            .copied()
            .unwrap_or_default()
    }

    /// Rows with one count per column, in column order.
    pub fn zero_filled_rows(&self) -> impl Iterator<Item = (&str, Vec<usize>)> {
        self.rows.iter().map(|(user, cells)| {
            let counts = self
                .columns
                .iter()
                .map(|number| cells.get(number).copied().unwrap_or_default())
                .collect();
            (user.as_str(), counts)
        })
    }

    /// Returns true when no user commented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
