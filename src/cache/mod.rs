//! Local JSON cache of collected review comments.
//!
//! A present cache file replaces fetching entirely: there is no merge and no
//! staleness check. The file written by this crate looks like:
//!
//! ```json
//! {
//!   "pull_requests": [{ "number": 42, "title": "…", "labels": ["cs249r"] }],
//!   "records": [
//!     { "user": "alice", "comment": "…", "pr_title": "…",
//!       "pr_number": 42, "profile_picture": "https://…" }
//!   ]
//! }
//! ```
//!
//! A bare array of records is also accepted on read. Pull requests are then
//! rebuilt from the distinct `pr_number` values in record order, so labelled
//! pull requests without comments cannot be recovered from that layout.

mod error;
mod record;

use std::collections::BTreeSet;
use std::fs;
use std::io;

use camino::Utf8Path;
use tracing::{debug, info};

pub use error::CacheError;
pub use record::CommentRecord;

use record::{CacheContents, CacheDocument};

use crate::github::{PullRequest, ReviewComment};
use crate::source::ReviewSnapshot;

/// Default cache file name, resolved against the working directory.
pub const DEFAULT_CACHE_FILE: &str = "student_comments.json";

/// Reads the snapshot stored at `path`.
///
/// Returns `Ok(None)` when no file exists.
///
/// # Errors
///
/// Returns [`CacheError::Read`] when the file exists but cannot be read and
/// [`CacheError::Parse`] when its contents are not a recognised layout.
pub fn read_snapshot(path: &Utf8Path) -> Result<Option<ReviewSnapshot>, CacheError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(%path, "no comment cache present");
            return Ok(None);
        }
        Err(error) => {
            return Err(CacheError::Read {
                path: path.to_string(),
                message: error.to_string(),
            });
        }
    };

    let contents: CacheContents =
        serde_json::from_str(&raw).map_err(|error| CacheError::Parse {
            path: path.to_string(),
            message: error.to_string(),
        })?;

    let snapshot = match contents {
        CacheContents::Document(document) => snapshot_from_document(document),
        CacheContents::Legacy(records) => snapshot_from_records(records),
    };
    info!(
        %path,
        pull_requests = snapshot.pull_requests.len(),
        comments = snapshot.comments.len(),
        "loaded comment cache"
    );
    Ok(Some(snapshot))
}

/// Writes `snapshot` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CacheError::Serialise`] if encoding fails and
/// [`CacheError::Write`] if the file cannot be written.
pub fn write_snapshot(path: &Utf8Path, snapshot: &ReviewSnapshot) -> Result<(), CacheError> {
    let document = CacheDocument {
        pull_requests: snapshot.pull_requests.clone(),
        records: snapshot.comments.iter().map(CommentRecord::from).collect(),
    };
    let encoded =
        serde_json::to_string_pretty(&document).map_err(|error| CacheError::Serialise {
            message: error.to_string(),
        })?;

    fs::write(path, encoded).map_err(|error| CacheError::Write {
        path: path.to_string(),
        message: error.to_string(),
    })?;
    info!(%path, records = document.records.len(), "wrote comment cache");
    Ok(())
}

fn snapshot_from_document(document: CacheDocument) -> ReviewSnapshot {
    ReviewSnapshot {
        pull_requests: document.pull_requests,
        comments: document
            .records
            .into_iter()
            .map(ReviewComment::from)
            .collect(),
    }
}

fn snapshot_from_records(records: Vec<CommentRecord>) -> ReviewSnapshot {
    let mut seen = BTreeSet::new();
    let pull_requests = records
        .iter()
        .filter(|record| seen.insert(record.pr_number))
        .map(|record| PullRequest {
            number: record.pr_number,
            title: record.pr_title.clone(),
            labels: BTreeSet::new(),
        })
        .collect();

    ReviewSnapshot {
        pull_requests,
        comments: records.into_iter().map(ReviewComment::from).collect(),
    }
}

#[cfg(test)]
mod tests;
