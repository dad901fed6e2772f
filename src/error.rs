//! Error types for claris

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the submission pipeline and review workflow
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any network call; no state was touched
    #[error("invalid submission: {0}")]
    Validation(String),

    /// The long-running call was cancelled when its timeout elapsed.
    ///
    /// The server may still be processing the request, so this is
    /// recoverable: check the review queue before retrying.
    #[error(
        "request timed out after {0}s; the server may still be processing, \
         so check the review queue before resubmitting"
    )]
    TransportTimeout(u64),

    /// Connectivity failure reaching the processing endpoint
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered, but not with a usable success response:
    /// bad status, malformed body, or a false/missing success flag
    #[error("{0}")]
    Protocol(String),

    /// A review-side collaborator call failed; no state was committed
    #[error("review operation failed: {0}")]
    Review(String),

    /// Another mutating operation is already running for this submission
    #[error("another operation is in flight for submission {0}")]
    OperationInFlight(String),

    /// No submission with the given id
    #[error("submission not found: {0}")]
    SubmissionNotFound(String),

    /// Configuration problem (bad endpoint URL, unusable environment)
    #[error("configuration error: {0}")]
    Config(String),

    /// Invariant violation inside claris itself
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the operation may have completed out-of-band.
    ///
    /// Recoverable errors direct the user to check submission status rather
    /// than assume failure or retry automatically.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::TransportTimeout(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // The executor's deadline normally wins; this covers transports
            // configured with their own timeout.
            Self::Transport(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::Transport(format!("could not reach server: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_recoverable() {
        assert!(Error::TransportTimeout(300).is_recoverable());
    }

    #[test]
    fn test_other_errors_are_not_recoverable() {
        assert!(!Error::Transport("connection refused".into()).is_recoverable());
        assert!(!Error::Protocol("success flag missing".into()).is_recoverable());
        assert!(!Error::Validation("no idea".into()).is_recoverable());
    }
}
