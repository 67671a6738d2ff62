//! Where a run's pull requests and review comments come from.
//!
//! The report only sees a [`ReviewSnapshot`] produced by some
//! [`ReviewSource`]. [`LiveSource`] walks the GitHub API, [`CacheSource`]
//! replays a cache file, and [`WriteThroughSource`] persists whatever its
//! inner source produced. [`select_source`] picks between cache and live
//! fetch based solely on whether the cache file exists.

mod cached;
mod live;

pub use cached::{CacheSource, WriteThroughSource};
pub use live::{LiveQuery, LiveSource};

use async_trait::async_trait;
use camino::Utf8Path;
use tracing::{debug, info};

use crate::cache::CacheError;
use crate::config::TallyConfig;
use crate::github::{
    IntakeError, OctocrabRepositoryGateway, PersonalAccessToken, PullRequest, RepositoryGateway,
    ReviewComment,
};

/// Everything a report needs: labelled pull requests and surviving comments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewSnapshot {
    /// Labelled pull requests in endpoint order.
    pub pull_requests: Vec<PullRequest>,
    /// Non-excluded review comments, grouped by pull request in fetch order.
    pub comments: Vec<ReviewComment>,
}

/// A provider of review snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Produce the snapshot for this run.
    async fn load(&self) -> Result<ReviewSnapshot, IntakeError>;
}

/// Chooses the cache when `cache_path` exists, otherwise a live fetch that
/// writes the cache on success.
///
/// `connect` is only invoked when a live fetch is needed, so a cached run
/// never builds an API client or resolves a token.
///
/// # Errors
///
/// Returns [`CacheError::Read`] when the existence check itself fails, or
/// whatever `connect` returns.
pub fn select_source<G, F>(
    cache_path: &Utf8Path,
    connect: F,
) -> Result<Box<dyn ReviewSource>, IntakeError>
where
    G: RepositoryGateway + 'static,
    F: FnOnce() -> Result<LiveSource<G>, IntakeError>,
{
    let cached = cache_path
        .try_exists()
        .map_err(|error| CacheError::Read {
            path: cache_path.to_string(),
            message: error.to_string(),
        })?;

    if cached {
        info!(path = %cache_path, "using comment cache; skipping GitHub");
        Ok(Box::new(CacheSource::new(cache_path)))
    } else {
        info!(path = %cache_path, "no comment cache; fetching from GitHub");
        Ok(Box::new(WriteThroughSource::new(connect()?, cache_path)))
    }
}

/// Selects the source for a configured run.
///
/// Repository settings are validated, the token resolved and the Octocrab
/// client built only when the cache is absent. A cached run therefore works
/// offline and ignores a blank label, a malformed API base or a missing
/// token.
///
/// # Errors
///
/// Returns whatever [`select_source`] or the live configuration reports.
pub fn configured_source(config: &TallyConfig) -> Result<Box<dyn ReviewSource>, IntakeError> {
    select_source(config.cache_path(), || {
        let query = config.live_query()?;
        debug!(
            owner = query.locator.owner().as_str(),
            repo = query.locator.repository().as_str(),
            label = %query.label,
            "fetching from GitHub"
        );
        let token = PersonalAccessToken::new(config.resolve_token()?)?;
        let gateway = OctocrabRepositoryGateway::for_token(&token, &query.locator)?;
        Ok(LiveSource::new(gateway, query))
    })
}
