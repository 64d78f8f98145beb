//! Error types for the augmentation client.
//!
//! Every failure the client can produce collapses into one [`Error`] enum so
//! callers branch on a single type plus the optional status code from
//! [`Error::status_code`].

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the augmentation client.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration, raised at construction time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request did not complete within the configured timeout.
    #[error("Timeout: request did not complete within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The server responded with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure before any HTTP response was obtained.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl Error {
    /// Create an API error from HTTP response details.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status code, if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is retryable (transient failures).
    ///
    /// The client never retries on its own; this is a convenience for
    /// callers implementing their own retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 429 || (*status >= 500 && *status < 600),
            Self::Timeout { .. } => true,
            Self::Connection(_) => true,
            Self::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let api_err = Error::api(500, "db down");
        assert_eq!(api_err.to_string(), "API error: 500 - db down");

        let config_err = Error::Config("server_url must not be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: server_url must not be empty"
        );

        let timeout_err = Error::Timeout { timeout_ms: 30_000 };
        assert_eq!(
            timeout_err.to_string(),
            "Timeout: request did not complete within 30000 ms"
        );

        let conn_err = Error::Connection("connection refused".to_string());
        assert_eq!(conn_err.to_string(), "Connection error: connection refused");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::api(404, "missing").status_code(), Some(404));
        assert_eq!(Error::Timeout { timeout_ms: 100 }.status_code(), None);
        assert_eq!(Error::Connection("dns".to_string()).status_code(), None);
        assert_eq!(Error::Config("bad".to_string()).status_code(), None);
    }

    #[test]
    fn test_is_timeout() {
        assert!(Error::Timeout { timeout_ms: 100 }.is_timeout());
        assert!(!Error::api(500, "").is_timeout());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::api(500, "").is_retryable());
        assert!(Error::api(503, "").is_retryable());
        assert!(Error::api(429, "").is_retryable());
        assert!(!Error::api(400, "").is_retryable());
        assert!(!Error::api(404, "").is_retryable());

        assert!(Error::Timeout { timeout_ms: 100 }.is_retryable());
        assert!(Error::Connection("refused".to_string()).is_retryable());
        assert!(!Error::Config("empty".to_string()).is_retryable());
    }

    #[test]
    fn test_api_error_constructor() {
        let err = Error::api(500, "Something went wrong");
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Something went wrong");
            }
            _ => panic!("Expected Api error"),
        }
    }
}
