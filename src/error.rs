//! Error types for flowlytics.
//!
//! Uses `thiserror` for structured error types. Authentication failures
//! carry the raw `status` object the console returns, so callers can
//! inspect `errorType`/`errorDetails` exactly as the upstream sent them.

use serde_json::Value;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowlyticsError>;

/// Main error type for flowlytics operations.
///
/// Every fetch resolves into a success or exactly one of these variants;
/// no status code or transport failure leaves a request pending.
#[derive(Error, Debug)]
pub enum FlowlyticsError {
    /// The console rejected the session tokens (HTTP 401).
    ///
    /// `status` is the response body's `status` sub-object, untouched.
    #[error("authentication rejected: {error_type}: {error_details}")]
    AuthRejected {
        error_type: String,
        error_details: String,
        status: Value,
    },

    /// The console answered with a status outside {200, 201, 401}.
    ///
    /// `body` is the parsed JSON payload when the response body parses,
    /// the raw text otherwise.
    #[error("unexpected HTTP {status} from upstream")]
    UnexpectedStatus { status: u16, body: Value },

    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Network-level failure (DNS, connection refused, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// A 200/201 response whose body was not valid JSON.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    /// A token contains bytes that cannot be sent as an HTTP header value.
    #[error("token '{0}' is not usable as a header value")]
    InvalidToken(String),
}

impl FlowlyticsError {
    /// The upstream `status` object, for authentication failures.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<&Value> {
        match self {
            Self::AuthRejected { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Whether this failure means the session tokens need refreshing.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::AuthRejected { .. })
    }
}
