//! Octocrab-backed repository gateway.
//!
//! Each call maps to a single `GET` with an explicit `page` query parameter.
//! The page loop lives in [`crate::github::pagination`].

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};

use crate::github::error::IntakeError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiPullRequest, ApiReviewComment, PullRequest, ReviewComment};

use super::RepositoryGateway;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a client that sends `token` as a bearer token to the API base
    /// held by `locator`.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the API base is not a valid
    /// HTTP URI or `IntakeError::Api` when Octocrab rejects the configuration.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, IntakeError> {
        // Octocrab appends `/repos/...` itself, so drop any trailing slash.
        let base_uri: Uri = locator
            .api_base()
            .as_str()
            .trim_end_matches('/')
            .parse()
            .map_err(|error: http::uri::InvalidUri| IntakeError::InvalidUrl(error.to_string()))?;

        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .map_err(|error| map_octocrab_error("configure client", &error))?
            .build()
            .map_err(|error| map_octocrab_error("build client", &error))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn list_pull_requests_page(
        &self,
        locator: &RepositoryLocator,
        page: u32,
    ) -> Result<Vec<PullRequest>, IntakeError> {
        let page_str = page.to_string();
        let query_params = [("state", "all"), ("page", page_str.as_str())];

        let page_result: Page<ApiPullRequest> = self
            .client
            .get(locator.pulls_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list pulls", &error))?;

        Ok(page_result
            .items
            .into_iter()
            .map(PullRequest::from)
            .collect())
    }

    async fn list_review_comments_page(
        &self,
        locator: &RepositoryLocator,
        pull_request: &PullRequest,
        page: u32,
    ) -> Result<Vec<ReviewComment>, IntakeError> {
        let page_str = page.to_string();
        let query_params = [("page", page_str.as_str())];

        let page_result: Page<ApiReviewComment> = self
            .client
            .get(
                locator.review_comments_path(pull_request.number),
                Some(&query_params),
            )
            .await
            .map_err(|error| map_octocrab_error("review comments", &error))?;

        Ok(page_result
            .items
            .into_iter()
            .map(|comment| comment.into_review_comment(pull_request))
            .collect())
    }
}

#[cfg(test)]
mod tests;
