//! Label-filtered pull request listing and review comment collection.

use tracing::debug;

use super::error::IntakeError;
use super::exclusion::ExclusionList;
use super::gateway::RepositoryGateway;
use super::locator::RepositoryLocator;
use super::models::{PullRequest, ReviewComment};
use super::pagination::{PaginationPolicy, collect_pages};

/// Walks the paged endpoints of one repository through a gateway.
pub struct ReviewIntake<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
    locator: &'client RepositoryLocator,
    policy: PaginationPolicy,
}

impl<'client, Gateway> ReviewIntake<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(
        client: &'client Gateway,
        locator: &'client RepositoryLocator,
        policy: PaginationPolicy,
    ) -> Self {
        Self {
            client,
            locator,
            policy,
        }
    }

    /// Lists every pull request, in endpoint order, whose labels include
    /// `label`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing page under [`PaginationPolicy::Strict`].
    pub async fn labelled_pull_requests(
        &self,
        label: &str,
    ) -> Result<Vec<PullRequest>, IntakeError> {
        let all = collect_pages("list pulls", self.policy, |page| {
            self.client.list_pull_requests_page(self.locator, page)
        })
        .await?;
        let total = all.len();

        let labelled: Vec<PullRequest> = all.into_iter().filter(|pr| pr.has_label(label)).collect();
        debug!(label, total, labelled = labelled.len(), "filtered pull requests");
        Ok(labelled)
    }

    /// Collects review comments on `pull_request`, dropping excluded authors.
    ///
    /// # Errors
    ///
    /// Propagates the first failing page under [`PaginationPolicy::Strict`].
    pub async fn review_comments(
        &self,
        pull_request: &PullRequest,
        exclusions: &ExclusionList,
    ) -> Result<Vec<ReviewComment>, IntakeError> {
        let all = collect_pages("review comments", self.policy, |page| {
            self.client
                .list_review_comments_page(self.locator, pull_request, page)
        })
        .await?;
        let total = all.len();

        let kept: Vec<ReviewComment> = all
            .into_iter()
            .filter(|comment| !exclusions.excludes(&comment.author_login))
            .collect();
        debug!(
            pr_number = pull_request.number,
            total,
            kept = kept.len(),
            "collected review comments"
        );
        Ok(kept)
    }
}
