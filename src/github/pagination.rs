//! Page-by-page traversal of GitHub listing endpoints.
//!
//! Listing endpoints are walked from page 1 until a page comes back empty.
//! Each request resolves to a [`PageOutcome`] or an [`IntakeError`]; the
//! [`PaginationPolicy`] decides whether an error ends the whole run or merely
//! truncates the listing.

use std::future::Future;

use tracing::{debug, warn};

use super::error::IntakeError;

/// First page number accepted by the GitHub REST API.
pub const FIRST_PAGE: u32 = 1;

/// How a failing page request affects the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationPolicy {
    /// Propagate the first failing page as an error.
    #[default]
    Strict,
    /// Keep the items gathered so far and stop at the first failing page.
    Lenient,
}

/// Result of a successful page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<T> {
    /// The page held at least one item; more pages may follow.
    Items(Vec<T>),
    /// The page was empty, so the listing is complete.
    Exhausted,
}

impl<T> From<Vec<T>> for PageOutcome<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Exhausted
        } else {
            Self::Items(items)
        }
    }
}

/// Requests pages starting at [`FIRST_PAGE`] until one is exhausted.
///
/// `fetch_page` receives the 1-based page number. Items are returned in the
/// order the pages delivered them.
///
/// # Errors
///
/// Under [`PaginationPolicy::Strict`] the first failing page is returned as
/// is. Under [`PaginationPolicy::Lenient`] failures are logged and never
/// returned; only a page counter overflow is reported.
pub async fn collect_pages<T, F, Fut>(
    operation: &str,
    policy: PaginationPolicy,
    mut fetch_page: F,
) -> Result<Vec<T>, IntakeError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, IntakeError>>,
{
    let mut collected = Vec::new();
    let mut page = FIRST_PAGE;

    loop {
        match fetch_page(page).await.map(PageOutcome::from) {
            Ok(PageOutcome::Items(items)) => {
                debug!(operation, page, items = items.len(), "fetched page");
                collected.extend(items);
                page = page.checked_add(1).ok_or_else(|| IntakeError::Api {
                    message: format!("{operation}: page counter overflowed"),
                })?;
            }
            Ok(PageOutcome::Exhausted) => {
                debug!(operation, page, total = collected.len(), "listing exhausted");
                return Ok(collected);
            }
            Err(error) => match policy {
                PaginationPolicy::Strict => return Err(error),
                PaginationPolicy::Lenient => {
                    warn!(
                        operation,
                        page,
                        kept = collected.len(),
                        "stopping pagination after failed page: {error}"
                    );
                    return Ok(collected);
                }
            },
        }
    }
}
