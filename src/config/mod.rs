//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach. Every field is optional: a
//! bare `tally` invocation reports on the course repository with the
//! built-in defaults.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.tally.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TALLY_*`, plus legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--label`/`-l`, `--token`/`-t`, …
//!
//! # Configuration File
//!
//! ```toml
//! owner = "harvard-edge"
//! repo = "cs249r_book"
//! label = "cs249r"
//! exclude = "profvjreddi,mpstewart1"
//! cache_path = "student_comments.json"
//! lenient_pagination = false
//! ```

use std::env;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_FILE;
use crate::github::error::IntakeError;
use crate::github::{
    DEFAULT_API_BASE, ExclusionList, PaginationPolicy, RepositoryLocator, default_exclusions,
};
use crate::source::LiveQuery;

/// Repository owner used when none is configured.
pub const DEFAULT_OWNER: &str = "harvard-edge";
/// Repository name used when none is configured.
pub const DEFAULT_REPO: &str = "cs249r_book";
/// Course label used when none is configured.
pub const DEFAULT_LABEL: &str = "cs249r";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `TALLY_OWNER` or `--owner`: Repository owner
/// - `TALLY_REPO` or `--repo`: Repository name
/// - `TALLY_LABEL` or `--label`: Pull request label to tally
/// - `TALLY_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `TALLY_EXCLUDE` or `--exclude`: Comma-separated logins to ignore
/// - `TALLY_CACHE_PATH` or `--cache-path`: Comment cache file
/// - `TALLY_API_BASE` or `--api-base`: GitHub API base URL
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use tally::TallyConfig;
///
/// let config = TallyConfig::load().expect("failed to load configuration");
/// let query = config.live_query().expect("repository settings should be valid");
/// assert_eq!(query.label, "cs249r");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TALLY",
    discovery(
        dotfile_name = ".tally.toml",
        config_file_name = "tally.toml",
        app_name = "tally"
    )
)]
pub struct TallyConfig {
    /// Repository owner (defaults to `harvard-edge`).
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `TALLY_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (defaults to `cs249r_book`).
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `TALLY_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Label a pull request must carry to be tallied (defaults to `cs249r`).
    ///
    /// Matching is exact and case-sensitive.
    #[ortho_config(cli_short = 'l')]
    pub label: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `TALLY_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Comma-separated logins whose comments are ignored.
    ///
    /// When unset, the course maintainers are excluded. Set it to an empty
    /// string to keep everyone.
    #[ortho_config(cli_short = 'x')]
    pub exclude: Option<String>,

    /// Comment cache file (defaults to `student_comments.json`).
    ///
    /// When the file exists it is used instead of GitHub; when it does not,
    /// the fetched comments are written to it.
    #[ortho_config(cli_short = 'c')]
    pub cache_path: Option<String>,

    /// GitHub API base URL (defaults to `https://api.github.com`).
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Keeps whatever was fetched when a page request fails instead of
    /// aborting the run.
    ///
    /// Note: like other booleans this is not read from the environment.
    #[ortho_config()]
    pub lenient_pagination: bool,
}

impl TallyConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(IntakeError::MissingToken)
    }

    /// Returns the configured label or the course default.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    /// Returns the configured exclusion list or the course maintainers.
    #[must_use]
    pub fn exclusion_list(&self) -> ExclusionList {
        self.exclude
            .as_deref()
            .map_or_else(default_exclusions, ExclusionList::parse)
    }

    /// Returns the cache file path.
    #[must_use]
    pub fn cache_path(&self) -> &Utf8Path {
        Utf8Path::new(self.cache_path.as_deref().unwrap_or(DEFAULT_CACHE_FILE))
    }

    /// Returns the pagination policy selected by `lenient_pagination`.
    #[must_use]
    pub const fn pagination_policy(&self) -> PaginationPolicy {
        if self.lenient_pagination {
            PaginationPolicy::Lenient
        } else {
            PaginationPolicy::Strict
        }
    }

    /// Builds the repository locator from owner, repo and API base.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidUrl`] or
    /// [`IntakeError::MissingRepository`] when a value is unusable.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, IntakeError> {
        RepositoryLocator::new(
            self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE),
            self.owner.as_deref().unwrap_or(DEFAULT_OWNER),
            self.repo.as_deref().unwrap_or(DEFAULT_REPO),
        )
    }

    /// Collects everything a live fetch needs.
    ///
    /// The label is kept verbatim since matching is exact.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] for a blank label, or any error
    /// from [`Self::repository_locator`].
    pub fn live_query(&self) -> Result<LiveQuery, IntakeError> {
        let label = self.label();
        if label.trim().is_empty() {
            return Err(IntakeError::Configuration {
                message: "label must not be blank (use --label or -l)".to_owned(),
            });
        }

        Ok(LiveQuery {
            locator: self.repository_locator()?,
            label: label.to_owned(),
            exclusions: self.exclusion_list(),
            policy: self.pagination_policy(),
        })
    }
}
