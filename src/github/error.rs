//! Error types exposed by the GitHub intake layer.

use thiserror::Error;

use crate::cache::CacheError;

/// Errors surfaced while configuring the run or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required (use --token, TALLY_TOKEN or GITHUB_TOKEN)")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository owner or name was blank.
    #[error("repository {field} must not be blank")]
    MissingRepository {
        /// Which half of `owner/repo` was blank.
        field: &'static str,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Writing the report failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The comment cache could not be read or written.
    #[error("comment cache: {0}")]
    Cache(#[from] CacheError),
}

impl IntakeError {
    /// Wraps an I/O failure from the report writer.
    pub(crate) fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
