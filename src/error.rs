//! Error types for the Fakturoid client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Out-of-range collection access is a distinct, catchable condition from
//! transport failure and is never used to mask one.

use thiserror::Error;

use crate::types::JsonValue;

/// The main error type for the Fakturoid client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Collection Errors
    // ============================================================================
    /// Collection access beyond the resolved bounds
    #[error("index {index} out of range")]
    IndexOutOfRange {
        /// The offending index, as given by the caller
        index: i64,
    },

    /// Operation the collection deliberately does not support
    #[error("unsupported operation: {message}")]
    Unsupported {
        /// What was attempted
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid client configuration
    #[error("configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// Invalid argument to an API call
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What is wrong
        message: String,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Connection-level failure from the HTTP stack
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response without a structured error payload
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Structured validation errors returned by the server
    #[error("API error: {errors}")]
    Api {
        /// The server's `errors` payload, verbatim
        errors: JsonValue,
    },

    /// Malformed URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Errors
    // ============================================================================
    /// Payload (de)serialization failure
    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an out-of-range error for the given index
    pub fn index_out_of_range(index: i64) -> Self {
        Self::IndexOutOfRange { index }
    }

    /// Create an unsupported operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is an out-of-range collection access
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Result type alias for the Fakturoid client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::index_out_of_range(11);
        assert_eq!(err.to_string(), "index 11 out of range");

        let err = Error::unsupported("negative slice step");
        assert_eq!(
            err.to_string(),
            "unsupported operation: negative slice step"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_index_out_of_range() {
        assert!(Error::index_out_of_range(-1).is_index_out_of_range());
        assert!(!Error::http_status(500, "").is_index_out_of_range());
        assert!(!Error::unsupported("x").is_index_out_of_range());
    }
}
