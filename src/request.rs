//! The request-side contract: what to call and how to interpret the result.
//!
//! Capability traits compose instead of extending a base type: [`Target`]
//! says where and how to call, [`DecodeResponse`] says how to turn the
//! response bytes into a value, and [`Request`] is the alias every
//! dispatchable type satisfies automatically. Upload capability layers on
//! top via [`FileUpload`] (one file) or [`MultiFileUpload`] (ordered
//! files); every single-file request is lifted into the multi-file
//! capability for free.

use bon::Builder;
use bytes::Bytes;
use http::{HeaderValue, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::{
    BaseUrl, HttpMethod, MimeType, NetworkError,
    platform::{MaybeSend, MaybeSendSync},
};

/// The address, method, and parameters of one call.
pub trait Target: MaybeSendSync {
    /// The base address the path is resolved against.
    fn base_url(&self) -> &BaseUrl;

    /// The request path, starting with `/`.
    fn path(&self) -> &str;

    /// The HTTP method.
    fn method(&self) -> HttpMethod;

    /// The request parameters, in the order they should be encoded.
    ///
    /// The ordering is caller-supplied and never sorted; do not rely on key
    /// order for semantics.
    fn parameters(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Resolves this target into a transport-ready message.
    ///
    /// Parameters become the query string for bodyless methods and an
    /// `application/x-www-form-urlencoded` body otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] when the base address, path,
    /// and parameters do not form a valid URI, and
    /// [`NetworkError::InvalidEncoding`] when the method or parameters
    /// cannot be encoded.
    fn as_http_request(&self) -> Result<http::Request<Bytes>, NetworkError> {
        let method = self.method();
        let parameters = self.parameters();

        let encoded = if parameters.is_empty() {
            None
        } else {
            Some(
                serde_html_form::to_string(&parameters)
                    .map_err(|_| NetworkError::InvalidEncoding)?,
            )
        };

        let (query, body) = if method.is_bodyless() {
            (encoded, None)
        } else {
            (None, encoded)
        };

        let uri = self.base_url().join(self.path(), query.as_deref())?;

        let (mut parts, ()) = http::Request::new(()).into_parts();
        parts.method = method.to_http()?;
        parts.uri = uri;

        let body = match body {
            Some(body) => {
                parts.headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                Bytes::from(body)
            }
            None => Bytes::new(),
        };

        Ok(http::Request::from_parts(parts, body))
    }
}

/// Turns response bytes into a typed value.
///
/// Supplied per request by the caller; the dispatcher invokes it exactly
/// once on the final response bytes and never inspects its logic. The
/// implementation must be pure with respect to its input bytes.
pub trait DecodeResponse: MaybeSendSync {
    /// The decoded result type.
    type Output: MaybeSend;

    /// Decodes the response body.
    ///
    /// # Errors
    ///
    /// Implementations conventionally return
    /// [`NetworkError::InvalidDecoding`] when the bytes do not match the
    /// expected shape.
    fn decode(&self, body: &Bytes) -> Result<Self::Output, NetworkError>;
}

/// A dispatchable request: a [`Target`] that can decode its response.
pub trait Request: Target + DecodeResponse {}

impl<T: Target + DecodeResponse> Request for T {}

/// Decodes a JSON response body.
///
/// # Errors
///
/// Returns [`NetworkError::NoData`] for an empty body and
/// [`NetworkError::InvalidDecoding`] when deserialization fails.
pub fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, NetworkError> {
    if body.is_empty() {
        return Err(NetworkError::NoData);
    }
    serde_json::from_slice(body).map_err(|_| NetworkError::InvalidDecoding)
}

/// One file destined for a multipart part.
///
/// Keys are form field names; two parts may share a key, which produces
/// two separate parts rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct FilePart {
    /// The form field name.
    #[builder(into)]
    pub key: String,
    /// The logical file name, without the generated suffix.
    #[builder(into)]
    pub file_name: String,
    /// The content type emitted as the part's `Content-Type`.
    pub mime_type: MimeType,
    /// The file payload.
    #[builder(into)]
    pub data: Bytes,
}

/// A request carrying exactly one file.
pub trait FileUpload: MaybeSendSync {
    /// Returns the file to upload.
    fn file(&self) -> FilePart;
}

/// A request carrying an ordered sequence of files.
///
/// Every [`FileUpload`] is also a [`MultiFileUpload`] of one part, so
/// `upload` accepts both shapes through this single bound.
pub trait MultiFileUpload: MaybeSendSync {
    /// Returns the files to upload, in part order.
    fn files(&self) -> Vec<FilePart>;
}

impl<T: FileUpload> MultiFileUpload for T {
    fn files(&self) -> Vec<FilePart> {
        vec![self.file()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntoBaseUrl as _;

    struct Plain {
        base: BaseUrl,
        method: HttpMethod,
        parameters: Vec<(String, String)>,
    }

    impl Plain {
        fn new(method: HttpMethod, parameters: Vec<(String, String)>) -> Self {
            Self {
                base: "https://example.com".into_base_url().unwrap(),
                method,
                parameters,
            }
        }
    }

    impl Target for Plain {
        fn base_url(&self) -> &BaseUrl {
            &self.base
        }

        fn path(&self) -> &str {
            "/api/endpoint"
        }

        fn method(&self) -> HttpMethod {
            self.method.clone()
        }

        fn parameters(&self) -> Vec<(String, String)> {
            self.parameters.clone()
        }
    }

    #[test]
    fn test_get_parameters_go_to_the_query_string() {
        let request = Plain::new(
            HttpMethod::Get,
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ],
        );
        let message = request.as_http_request().unwrap();
        assert_eq!(message.method(), http::Method::GET);
        // Caller-supplied ordering is preserved, never sorted.
        assert_eq!(
            message.uri().to_string(),
            "https://example.com/api/endpoint?b=2&a=1"
        );
        assert!(message.body().is_empty());
    }

    #[test]
    fn test_post_parameters_go_to_a_form_body() {
        let request = Plain::new(
            HttpMethod::Post,
            vec![("name".to_string(), "value".to_string())],
        );
        let message = request.as_http_request().unwrap();
        assert_eq!(message.uri().to_string(), "https://example.com/api/endpoint");
        assert_eq!(
            message.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(message.body().as_ref(), b"name=value");
    }

    #[test]
    fn test_no_parameters_means_no_query_and_no_body() {
        let request = Plain::new(HttpMethod::Get, Vec::new());
        let message = request.as_http_request().unwrap();
        assert_eq!(message.uri().to_string(), "https://example.com/api/endpoint");
        assert!(message.headers().get(CONTENT_TYPE).is_none());
        assert!(message.body().is_empty());
    }

    #[test]
    fn test_decode_json() {
        assert_eq!(decode_json::<u64>(&Bytes::from_static(b"42")), Ok(42));
        assert_eq!(
            decode_json::<u64>(&Bytes::new()),
            Err(NetworkError::NoData)
        );
        assert_eq!(
            decode_json::<u64>(&Bytes::from_static(b"invalid")),
            Err(NetworkError::InvalidDecoding)
        );
    }

    #[test]
    fn test_single_file_lifts_into_multi_file() {
        struct OneFile;

        impl FileUpload for OneFile {
            fn file(&self) -> FilePart {
                FilePart::builder()
                    .key("file")
                    .file_name("photo")
                    .mime_type(MimeType::Png)
                    .data(Bytes::new())
                    .build()
            }
        }

        let parts = OneFile.files();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].key, "file");
        assert_eq!(parts[0].mime_type, MimeType::Png);
    }
}
