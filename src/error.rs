//! Error types and the [`Error`] trait.
//!
//! All errors in this library implement the [`Error`] trait, which extends
//! [`std::error::Error`] with retry semantics. [`NetworkError`] is the fixed
//! protocol/application taxonomy; transport-level failures are never folded
//! into it and surface through their own types instead.

use std::convert::Infallible;

use snafu::{AsErrorSource, Snafu};

use crate::platform::MaybeSendSync;

/// Errors that may occur in the library.
pub trait Error: std::error::Error + AsErrorSource + MaybeSendSync + 'static {
    /// If true, this indicates that a failed request may succeed if retried.
    fn is_retryable(&self) -> bool;
}

impl Error for Infallible {
    fn is_retryable(&self) -> bool {
        false
    }
}

/// A boxed error that can be used without type parameters.
#[derive(Debug, Snafu)]
#[snafu(transparent)]
pub struct BoxedError {
    source: Box<dyn Error>,
}

impl BoxedError {
    /// Create a new boxed error from a generic `Error`.
    pub fn from_err<E: Error + 'static>(err: E) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

impl Error for BoxedError {
    fn is_retryable(&self) -> bool {
        self.source.is_retryable()
    }
}

/// The closed taxonomy of protocol and application failures.
///
/// Status-derived values (`BadRequest` through `Custom`) come out of
/// [`crate::status::check`]; the remaining values describe request
/// construction and response handling. The set and its classification rules
/// are a compatibility contract — consumers branch on these variants.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum NetworkError {
    /// The base address, path, and parameters do not form a valid URL.
    #[snafu(display("The URL is invalid."))]
    InvalidUrl,
    /// The transport produced no well-formed HTTP response.
    #[snafu(display("The response is invalid."))]
    InvalidResponse,
    /// The response body could not be decoded into the expected type.
    #[snafu(display("Failed to decode the response."))]
    InvalidDecoding,
    /// The request could not be encoded.
    #[snafu(display("Failed to encode the request."))]
    InvalidEncoding,
    /// The server returned 400.
    #[snafu(display("Bad request."))]
    BadRequest,
    /// The server returned 401.
    #[snafu(display("Unauthorized access."))]
    Unauthorized,
    /// The server returned 403.
    #[snafu(display("Access is forbidden."))]
    Forbidden,
    /// The server returned 404.
    #[snafu(display("Resource not found."))]
    NotFound,
    /// The response carried no data where some was expected.
    #[snafu(display("No data received."))]
    NoData,
    /// The server returned a 5xx status.
    #[snafu(display("Server error: {message}"))]
    Server {
        /// Description embedding the numeric status code.
        message: String,
    },
    /// Any other failure, including unclassified status codes.
    #[snafu(display("Error: {message}"))]
    Custom {
        /// Description of the failure.
        message: String,
    },
}

impl Error for NetworkError {
    fn is_retryable(&self) -> bool {
        // A 5xx may clear up; everything else is deterministic.
        matches!(self, NetworkError::Server { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_consumer_contract() {
        assert_eq!(NetworkError::InvalidUrl.to_string(), "The URL is invalid.");
        assert_eq!(
            NetworkError::InvalidDecoding.to_string(),
            "Failed to decode the response."
        );
        assert_eq!(
            NetworkError::Server {
                message: "HTTP 503".to_string()
            }
            .to_string(),
            "Server error: HTTP 503"
        );
        assert_eq!(
            NetworkError::Custom {
                message: "boom".to_string()
            }
            .to_string(),
            "Error: boom"
        );
    }

    #[test]
    fn test_only_server_errors_are_retryable() {
        assert!(
            NetworkError::Server {
                message: "HTTP 500".to_string()
            }
            .is_retryable()
        );
        assert!(!NetworkError::BadRequest.is_retryable());
        assert!(!NetworkError::InvalidResponse.is_retryable());
        assert!(!NetworkError::InvalidDecoding.is_retryable());
    }
}
