//! Error types for the comment cache file.

use thiserror::Error;

/// Errors returned while reading or writing the comment cache.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// The cache file exists but could not be read.
    #[error("failed to read '{path}': {message}")]
    Read {
        /// Cache file path.
        path: String,
        /// Error detail from the filesystem.
        message: String,
    },

    /// The cache file is not a record list or snapshot document.
    #[error("'{path}' is not a valid comment cache: {message}")]
    Parse {
        /// Cache file path.
        path: String,
        /// Error detail from `serde_json`.
        message: String,
    },

    /// Encoding the snapshot as JSON failed.
    #[error("failed to encode comment cache: {message}")]
    Serialise {
        /// Error detail from `serde_json`.
        message: String,
    },

    /// Writing the cache file failed.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// Cache file path.
        path: String,
        /// Error detail from the filesystem.
        message: String,
    },
}
