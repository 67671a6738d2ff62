//! On-disk shapes of the comment cache.

use serde::{Deserialize, Serialize};

use crate::github::{PullRequest, ReviewComment};

/// One surviving review comment, flattened for the cache file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Author login.
    pub user: String,
    /// Comment body.
    pub comment: String,
    /// Title of the pull request the comment belongs to.
    pub pr_title: String,
    /// Number of the pull request the comment belongs to.
    pub pr_number: u64,
    /// Author avatar URL.
    pub profile_picture: String,
}

impl From<&ReviewComment> for CommentRecord {
    fn from(comment: &ReviewComment) -> Self {
        Self {
            user: comment.author_login.clone(),
            comment: comment.body.clone(),
            pr_title: comment.pr_title.clone(),
            pr_number: comment.pr_number,
            profile_picture: comment.avatar_url.clone(),
        }
    }
}

impl From<CommentRecord> for ReviewComment {
    fn from(record: CommentRecord) -> Self {
        Self {
            author_login: record.user,
            body: record.comment,
            pr_number: record.pr_number,
            pr_title: record.pr_title,
            avatar_url: record.profile_picture,
        }
    }
}

/// Current cache layout: the labelled pull requests plus their records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct CacheDocument {
    pub(super) pull_requests: Vec<PullRequest>,
    pub(super) records: Vec<CommentRecord>,
}

/// Either cache layout accepted on read.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum CacheContents {
    /// Snapshot document written by this tool.
    Document(CacheDocument),
    /// Bare record array with no pull request list.
    Legacy(Vec<CommentRecord>),
}
