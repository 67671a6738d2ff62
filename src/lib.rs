//! Tally library crate for review participation reports.
//!
//! The library lists a course repository's labelled pull requests, collects
//! their review comments, caches them to a JSON file, and turns them into a
//! user × pull request grid of word counts that can be written as CSV.

pub mod cache;
pub mod config;
pub mod github;
pub mod report;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;

pub use cache::{CacheError, CommentRecord, DEFAULT_CACHE_FILE, read_snapshot, write_snapshot};
pub use config::TallyConfig;
pub use github::{
    ExclusionList, IntakeError, OctocrabRepositoryGateway, PaginationPolicy, PersonalAccessToken,
    PullRequest, RepositoryGateway, RepositoryLocator, ReviewComment, ReviewIntake,
};
pub use report::{Grid, build_report, tally, write_csv};
pub use source::{
    CacheSource, LiveQuery, LiveSource, ReviewSnapshot, ReviewSource, WriteThroughSource,
    configured_source, select_source,
};
