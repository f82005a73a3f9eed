//! HTTP request methods.

use http::Method;

use crate::NetworkError;

/// The HTTP method of a request.
///
/// A closed set of the standard verbs plus [`HttpMethod::Custom`] for
/// anything else. Conversion to [`http::Method`] only fails for a custom
/// verb that is not a valid HTTP token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace,
    /// `CONNECT`
    Connect,
    /// An arbitrary verb.
    Custom(String),
}

impl HttpMethod {
    /// Returns the verb as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Custom(value) => value,
        }
    }

    /// Whether requests with this method carry their parameters in the
    /// query string rather than the body.
    ///
    /// Custom verbs are assumed to carry a body.
    #[must_use]
    pub fn is_bodyless(&self) -> bool {
        matches!(
            self,
            HttpMethod::Get
                | HttpMethod::Head
                | HttpMethod::Delete
                | HttpMethod::Options
                | HttpMethod::Trace
                | HttpMethod::Connect
        )
    }

    /// Converts to an [`http::Method`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidEncoding`] when a custom verb is not a
    /// valid HTTP token.
    pub fn to_http(&self) -> Result<Method, NetworkError> {
        Ok(match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
            HttpMethod::Trace => Method::TRACE,
            HttpMethod::Connect => Method::CONNECT,
            HttpMethod::Custom(value) => Method::from_bytes(value.as_bytes())
                .map_err(|_| NetworkError::InvalidEncoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_strings() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Head.as_str(), "HEAD");
        assert_eq!(HttpMethod::Options.as_str(), "OPTIONS");
        assert_eq!(HttpMethod::Trace.as_str(), "TRACE");
        assert_eq!(HttpMethod::Connect.as_str(), "CONNECT");
        assert_eq!(
            HttpMethod::Custom("PROPFIND".to_string()).as_str(),
            "PROPFIND"
        );
    }

    #[test]
    fn test_custom_verb_conversion() {
        let method = HttpMethod::Custom("PROPFIND".to_string()).to_http().unwrap();
        assert_eq!(method.as_str(), "PROPFIND");
    }

    #[test]
    fn test_invalid_custom_verb_is_an_encoding_error() {
        let result = HttpMethod::Custom("NOT A TOKEN".to_string()).to_http();
        assert_eq!(result.unwrap_err(), NetworkError::InvalidEncoding);
    }

    #[test]
    fn test_bodyless_methods() {
        assert!(HttpMethod::Get.is_bodyless());
        assert!(HttpMethod::Head.is_bodyless());
        assert!(HttpMethod::Delete.is_bodyless());
        assert!(!HttpMethod::Post.is_bodyless());
        assert!(!HttpMethod::Put.is_bodyless());
        assert!(!HttpMethod::Patch.is_bodyless());
        assert!(!HttpMethod::Custom("PROPFIND".to_string()).is_bodyless());
    }
}
