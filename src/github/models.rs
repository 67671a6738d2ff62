//! Data models representing labelled pull requests and their review comments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Login GitHub reports for comments whose author account was deleted.
pub const GHOST_LOGIN: &str = "ghost";

/// Pull request metadata retained for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: String,
    /// Names of the labels attached to the pull request.
    #[serde(default)]
    pub labels: BTreeSet<String>,
}

impl PullRequest {
    /// Returns true when one of the labels matches `label` exactly.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

/// A review comment attached to a line of a pull request diff.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewComment {
    /// Author login.
    pub author_login: String,
    /// Comment body text.
    pub body: String,
    /// Number of the pull request the comment belongs to.
    pub pr_number: u64,
    /// Title of the pull request the comment belongs to.
    pub pr_title: String,
    /// Avatar URL of the author.
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReviewComment {
    pub(crate) body: Option<String>,
    pub(crate) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: String,
    pub(crate) avatar_url: Option<String>,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title.unwrap_or_default(),
            labels: value.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}

impl ApiReviewComment {
    /// Attaches the owning pull request to a raw API comment.
    pub(crate) fn into_review_comment(self, pull_request: &PullRequest) -> ReviewComment {
        let (author_login, avatar_url) = match self.user {
            Some(user) => (user.login, user.avatar_url.unwrap_or_default()),
            None => (GHOST_LOGIN.to_owned(), String::new()),
        };

        ReviewComment {
            author_login,
            body: self.body.unwrap_or_default(),
            pr_number: pull_request.number,
            pr_title: pull_request.title.clone(),
            avatar_url,
        }
    }
}
