//! Per-author, per-pull-request word counts.

use std::collections::BTreeMap;

use crate::github::ReviewComment;

/// Word count for one (user, pull request) pair with at least one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRow {
    /// Author login.
    pub user: String,
    /// Pull request number.
    pub pr_number: u64,
    /// Whitespace-delimited tokens across the user's comments on the PR.
    pub word_count: usize,
}

/// Counts whitespace-delimited tokens; runs of whitespace count once.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Groups comments by (user, pull request) and counts their words.
///
/// Bodies in a group are joined with single spaces in arrival order before
/// counting. Rows come out ordered by user, then pull request number.
#[must_use]
pub fn aggregate(comments: &[ReviewComment]) -> Vec<AggregatedRow> {
    let mut groups: BTreeMap<(&str, u64), Vec<&str>> = BTreeMap::new();
    for comment in comments {
        groups
            .entry((comment.author_login.as_str(), comment.pr_number))
            .or_default()
            .push(comment.body.as_str());
    }

    groups
        .into_iter()
        .map(|((user, pr_number), bodies)| AggregatedRow {
            user: user.to_owned(),
            pr_number,
            word_count: count_words(&bodies.join(" ")),
        })
        .collect()
}
