//! Logins whose review comments are left out of the tally.

use std::collections::BTreeSet;

/// Course maintainers excluded when no list is configured.
pub const DEFAULT_EXCLUDED_USERS: [&str; 4] =
    ["profvjreddi", "mpstewart1", "uchendui", "happyappledog"];

/// Set of author logins to drop while collecting comments.
///
/// Matching is exact and case-sensitive, mirroring how GitHub reports logins
/// in API payloads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExclusionList(BTreeSet<String>);

impl ExclusionList {
    /// Builds a list from individual logins, ignoring blank entries.
    #[must_use]
    pub fn new<I, S>(logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            logins
                .into_iter()
                .map(|login| login.as_ref().trim().to_owned())
                .filter(|login| !login.is_empty())
                .collect(),
        )
    }

    /// Parses a comma-separated list such as `alice, bob`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Returns true when comments by `login` should be dropped.
    #[must_use]
    pub fn excludes(&self, login: &str) -> bool {
        self.0.contains(login)
    }

    /// Number of excluded logins.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

/// Returns the built-in maintainer list.
#[must_use]
pub fn default_exclusions() -> ExclusionList {
    ExclusionList::new(DEFAULT_EXCLUDED_USERS)
}
