//! Gateways for listing pull requests and review comments through Octocrab.
//!
//! The [`RepositoryGateway`] trait fetches exactly one page per call so that
//! pagination stays in [`crate::github::pagination`]. The Octocrab
//! implementation handles real HTTP requests; tests substitute the mockall
//! double.

mod error_mapping;
mod repository;

pub use repository::OctocrabRepositoryGateway;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{PullRequest, ReviewComment};

/// Gateway for the two paged listing endpoints the tally needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetch one page of pull requests in any state.
    async fn list_pull_requests_page(
        &self,
        locator: &RepositoryLocator,
        page: u32,
    ) -> Result<Vec<PullRequest>, IntakeError>;

    /// Fetch one page of review comments for `pull_request`.
    async fn list_review_comments_page(
        &self,
        locator: &RepositoryLocator,
        pull_request: &PullRequest,
        page: u32,
    ) -> Result<Vec<ReviewComment>, IntakeError>;
}
