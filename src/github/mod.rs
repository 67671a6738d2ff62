//! GitHub pull request and review comment intake.
//!
//! This module wraps Octocrab to list a repository's pull requests, keep the
//! ones carrying a course label, and collect their review comments one page
//! at a time. Errors are mapped into [`IntakeError`] variants so callers can
//! tell an authentication failure from an exhausted listing.

pub mod error;
pub mod exclusion;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::IntakeError;
pub use exclusion::{DEFAULT_EXCLUDED_USERS, ExclusionList, default_exclusions};
pub use gateway::{OctocrabRepositoryGateway, RepositoryGateway};
pub use intake::ReviewIntake;
pub use locator::{
    DEFAULT_API_BASE, PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner,
};
pub use models::{PullRequest, ReviewComment};
pub use pagination::{PageOutcome, PaginationPolicy};

#[cfg(test)]
pub use gateway::MockRepositoryGateway;
