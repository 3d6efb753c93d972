//! Error taxonomy for backend operations.

use thiserror::Error;

/// Failure of a one-shot backend operation.
///
/// The UI collapses every variant into a single generic message; the
/// variants exist for logs and for callers that need the distinction.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connectivity failure before an HTTP status was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("request rejected: {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation requires an authenticated session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The operation is not available to the session's role.
    #[error("forbidden for the current role")]
    Forbidden,
}
