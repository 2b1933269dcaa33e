//! Error types for the catalog and feed layers.
//!
//! One enum per concern, all recoverable by retrying:
//!
//! - [`FetchError`] - item data source unreachable or non-2xx
//! - [`WriteError`] - write endpoint unreachable, non-2xx, or too slow
//! - [`FeedError`] - real-time subscription problems
//! - [`StoreError`] - key-value persistence of favorites

use thiserror::Error;

/// Errors raised while fetching item data over HTTP.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Network request failed (CORS, connection refused, ...)
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// Response body was not the expected JSON
    #[error("invalid JSON: {0}")]
    Json(String),
    /// Request timed out
    #[error("request timed out")]
    Timeout,
}

/// Errors raised by write endpoints (journal entries, live collection posts).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WriteError {
    /// The upstream write call failed before being accepted.
    #[error("write rejected: {0}")]
    Rejected(String),
    /// The write did not settle within the caller's deadline.
    #[error("write timed out")]
    Timeout,
}

impl From<FetchError> for WriteError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout => Self::Timeout,
            other => Self::Rejected(other.to_string()),
        }
    }
}

/// Errors raised by the live feed subscription.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// The upstream feed reported an error.
    #[error("subscription error: {0}")]
    Subscription(String),
    /// A snapshot contained a document that could not be normalized.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
    /// `start` was called on an adapter that already subscribed.
    #[error("feed already started")]
    AlreadyStarted,
}

/// Errors raised by key-value persistence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Storage backend not available.
    #[error("storage not available")]
    Unavailable,
    /// Value could not be serialized to JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(String),
    /// Storage refused the write (quota, privacy mode).
    #[error("failed to write to storage")]
    Write,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status_text() {
        let err = FetchError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_fetch_timeout_maps_to_write_timeout() {
        assert_eq!(WriteError::from(FetchError::Timeout), WriteError::Timeout);
    }

    #[test]
    fn test_fetch_failure_maps_to_rejected() {
        let err = WriteError::from(FetchError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        });
        assert_eq!(
            err,
            WriteError::Rejected("HTTP 500: Internal Server Error".to_string())
        );
    }
}
