//! Cache-backed snapshot sources.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use crate::cache::{self, CacheError};
use crate::github::IntakeError;

use super::{ReviewSnapshot, ReviewSource};

/// Replays a previously written cache file without touching the network.
#[derive(Debug, Clone)]
pub struct CacheSource {
    path: Utf8PathBuf,
}

impl CacheSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: &Utf8Path) -> Self {
        Self {
            path: path.to_owned(),
        }
    }
}

#[async_trait]
impl ReviewSource for CacheSource {
    async fn load(&self) -> Result<ReviewSnapshot, IntakeError> {
        cache::read_snapshot(&self.path)?.ok_or_else(|| {
            IntakeError::from(CacheError::Read {
                path: self.path.to_string(),
                message: "cache file disappeared before it could be read".to_owned(),
            })
        })
    }
}

/// Writes the inner source's snapshot to the cache before returning it.
///
/// Nothing is written when the inner source fails.
pub struct WriteThroughSource<S> {
    inner: S,
    path: Utf8PathBuf,
}

impl<S> WriteThroughSource<S>
where
    S: ReviewSource,
{
    /// Wraps `inner`, persisting its snapshot to `path`.
    #[must_use]
    pub fn new(inner: S, path: &Utf8Path) -> Self {
        Self {
            inner,
            path: path.to_owned(),
        }
    }
}

#[async_trait]
impl<S> ReviewSource for WriteThroughSource<S>
where
    S: ReviewSource,
{
    async fn load(&self) -> Result<ReviewSnapshot, IntakeError> {
        let snapshot = self.inner.load().await?;
        cache::write_snapshot(&self.path, &snapshot)?;
        Ok(snapshot)
    }
}
