//! Error types for the CoinGate API client.
//!
//! Failures come in two kinds and nothing is silently swallowed:
//! [`ClientError`] for local contract violations detected before or outside
//! of a successful exchange with the API, and [`ApiError`] for non-success
//! responses reported by CoinGate itself. [`CoinGateError`] is the umbrella
//! type returned by every client operation.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, CoinGateError>;

/// Top-level error type returned by all public client operations.
#[derive(Debug, Error)]
pub enum CoinGateError {
    /// A local, client-side contract violation.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An error reported by the CoinGate API.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Client-side error raised without (or before) a successful API exchange.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A mandatory field was absent from an API response record.
    #[error("field `{0}` is required and missing")]
    MissingField(&'static str),

    /// A response field failed validation or could not be cast.
    #[error("field `{0}` has an invalid value")]
    InvalidField(&'static str),

    /// Environment name other than `"sandbox"` or `"live"`.
    #[error("invalid environment `{0}`, expected \"sandbox\" or \"live\"")]
    InvalidEnvironment(String),

    /// Sort token outside the set accepted by the order listing endpoint.
    #[error("invalid sort token `{0}`")]
    InvalidSortToken(String),

    /// Rate category/subcategory combination the API does not support.
    #[error("invalid rate query: {0}")]
    InvalidRateQuery(String),

    /// Attempt to serialize an order without a `receive_currency` set.
    #[error("cannot serialize an order without a receive_currency set")]
    MissingReceiveCurrency,

    /// Credentials that cannot be carried in HTTP headers.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The underlying HTTP client could not be initialized.
    #[error("failed to initialize HTTP client: {0}")]
    Initialization(String),

    /// Transport-level failure (DNS, timeout, connection reset).
    #[error("connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// The scalar rate endpoint returned an empty body, meaning the pair is
    /// not supported.
    #[error("no exchange rate available for the {0}{1} pair")]
    NoRateAvailable(String, String),

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Error reported by the CoinGate API on a non-success HTTP status.
///
/// Carries the remote-reported reason, message, and optional field-level
/// error list for the caller to inspect or log. Never retried automatically.
#[derive(Debug, Clone, Error)]
#[error("{reason} ({status}): {message}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Machine-readable error reason, e.g. `invalid_request`.
    pub reason: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level error descriptions, when provided.
    pub errors: Vec<String>,
}

impl ApiError {
    /// Build an [`ApiError`] from a decoded error body and response status.
    pub(crate) fn from_response(status: u16, response: ErrorResponse) -> Self {
        ApiError {
            status,
            reason: response.reason.unwrap_or_else(|| "unknown".to_string()),
            message: response.message.unwrap_or_default(),
            errors: response.errors,
        }
    }
}

/// Wire shape of a CoinGate error body.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    /// Fallback for bodies that are not valid error JSON.
    pub(crate) fn from_text(text: String) -> Self {
        ErrorResponse {
            reason: None,
            message: Some(text),
            errors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_error_body() {
        let body = r#"{"reason": "invalid_request", "message": "bad price", "errors": ["price is invalid"]}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        let err = ApiError::from_response(422, response);
        assert_eq!(err.status, 422);
        assert_eq!(err.reason, "invalid_request");
        assert_eq!(err.message, "bad price");
        assert_eq!(err.errors, vec!["price is invalid".to_string()]);
    }

    #[test]
    fn tolerates_partial_error_body() {
        let response: ErrorResponse = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        let err = ApiError::from_response(500, response);
        assert_eq!(err.reason, "unknown");
        assert_eq!(err.message, "boom");
        assert!(err.errors.is_empty());
    }

    #[test]
    fn display_matches_reason_status_message() {
        let err = ApiError {
            status: 422,
            reason: "invalid_request".to_string(),
            message: "bad price".to_string(),
            errors: Vec::new(),
        };
        assert_eq!(err.to_string(), "invalid_request (422): bad price");
    }

    #[test]
    fn initialization_failure_does_not_read_as_a_transport_failure() {
        let err = ClientError::Initialization("native TLS backend unavailable".to_string());
        assert_eq!(
            err.to_string(),
            "failed to initialize HTTP client: native TLS backend unavailable"
        );
        assert!(!err.to_string().contains("connection failed"));
    }

    #[test]
    fn from_text_keeps_raw_body_as_message() {
        let response = ErrorResponse::from_text("<html>gateway timeout</html>".to_string());
        let err = ApiError::from_response(504, response);
        assert_eq!(err.reason, "unknown");
        assert_eq!(err.message, "<html>gateway timeout</html>");
    }
}
