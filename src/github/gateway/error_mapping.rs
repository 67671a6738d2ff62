//! Translation of Octocrab failures into [`IntakeError`].

use http::StatusCode;

use crate::github::error::IntakeError;

/// Classifies an Octocrab failure raised while performing `operation`.
///
/// GitHub responses are split by status, transport failures become
/// [`IntakeError::Network`], and anything else is reported as an API error.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> IntakeError {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            from_status(operation, source.status_code, &source.message)
        }
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => IntakeError::Network {
            message: format!("{operation}: {error}"),
        },
        other => IntakeError::Api {
            message: format!("{operation}: {other}"),
        },
    }
}

/// 401 and 403 mean the token was rejected.
fn from_status(operation: &str, status: StatusCode, message: &str) -> IntakeError {
    let detail = format!("{operation} returned {status}: {message}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            IntakeError::Authentication { message: detail }
        }
        _ => IntakeError::Api { message: detail },
    }
}
