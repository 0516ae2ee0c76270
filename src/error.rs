//! Error types for sublock.
//!
//! Uses `thiserror` for ergonomic error definitions. None of these reach the
//! user as a crash: fetch errors become an empty candidate set, resolve errors
//! drop the candidate, and probe failures are outcomes rather than errors.

use thiserror::Error;

/// Failure querying the certificate-transparency service.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("lookup service returned status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure resolving a single candidate hostname.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("name does not exist")]
    NxDomain,

    #[error("no A record in answer")]
    NoAnswer,

    #[error("resolution timed out")]
    Timeout,

    #[error("resolver error: {0}")]
    Other(String),
}

impl ResolveError {
    /// Whether this is one of the ordinary "host is not live" outcomes.
    ///
    /// Anything else is unexpected and worth a warning, though the
    /// candidate is dropped either way.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NxDomain | Self::NoAnswer | Self::Timeout)
    }
}

/// Failure constructing a pipeline collaborator.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure of a complete command-line run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for lookup-service operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for DNS lookups.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type alias for collaborator construction.
pub type SetupResult<T> = Result<T, SetupError>;

/// Result type alias for command-line runs.
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_resolve_errors() {
        assert!(ResolveError::NxDomain.is_expected());
        assert!(ResolveError::NoAnswer.is_expected());
        assert!(ResolveError::Timeout.is_expected());
        assert!(!ResolveError::Other("io".to_string()).is_expected());
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "lookup service returned status 503"
        );
    }
}
