//! Snapshot source backed by the GitHub API.

use async_trait::async_trait;
use tracing::info;

use crate::github::{
    ExclusionList, IntakeError, PaginationPolicy, RepositoryGateway, RepositoryLocator,
    ReviewIntake,
};

use super::{ReviewSnapshot, ReviewSource};

/// What to fetch: repository, label filter, excluded authors and paging rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveQuery {
    /// Repository to list.
    pub locator: RepositoryLocator,
    /// Label a pull request must carry to be tallied.
    pub label: String,
    /// Authors whose comments are dropped.
    pub exclusions: ExclusionList,
    /// How failed page requests are handled.
    pub policy: PaginationPolicy,
}

/// Fetches labelled pull requests, then their comments, one request at a time.
pub struct LiveSource<G> {
    gateway: G,
    query: LiveQuery,
}

impl<G> LiveSource<G>
where
    G: RepositoryGateway,
{
    /// Creates a live source over `gateway`.
    #[must_use]
    pub const fn new(gateway: G, query: LiveQuery) -> Self {
        Self { gateway, query }
    }
}

#[async_trait]
impl<G> ReviewSource for LiveSource<G>
where
    G: RepositoryGateway,
{
    async fn load(&self) -> Result<ReviewSnapshot, IntakeError> {
        let intake = ReviewIntake::new(&self.gateway, &self.query.locator, self.query.policy);
        let pull_requests = intake.labelled_pull_requests(&self.query.label).await?;

        let mut comments = Vec::new();
        for pull_request in &pull_requests {
            let collected = intake
                .review_comments(pull_request, &self.query.exclusions)
                .await?;
            comments.extend(collected);
        }

        info!(
            label = %self.query.label,
            pull_requests = pull_requests.len(),
            comments = comments.len(),
            excluded_authors = self.query.exclusions.len(),
            "fetched review comments from GitHub"
        );
        Ok(ReviewSnapshot {
            pull_requests,
            comments,
        })
    }
}
