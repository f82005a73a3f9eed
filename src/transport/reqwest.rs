use std::sync::LazyLock;

use super::{Transport, TransportResponse};

use bytes::Bytes;
use http::{Request, StatusCode};

impl Transport for reqwest::Client {
    /// The response type is `reqwest::Response`.
    type Response = reqwest::Response;
    /// The error type is `reqwest::Error`.
    type Error = reqwest::Error;

    /// Executes an `http::Request` using the `reqwest::Client`.
    ///
    /// This method converts the generic `http::Request<Bytes>` into a
    /// `reqwest::Request` and then sends it.
    async fn send(&self, request: Request<Bytes>) -> Result<Self::Response, Self::Error> {
        let (parts, body) = request.into_parts();
        let reqwest_request = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .build()?;

        self.execute(reqwest_request).await
    }
}

impl Transport for LazyLock<reqwest::Client> {
    /// The response type is `reqwest::Response`.
    type Response = reqwest::Response;
    /// The error type is `reqwest::Error`.
    type Error = reqwest::Error;

    /// Executes an `http::Request` using the lazily-initialized
    /// `reqwest::Client`.
    async fn send(&self, request: Request<Bytes>) -> Result<Self::Response, Self::Error> {
        let (parts, body) = request.into_parts();
        let reqwest_request = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .build()?;

        self.execute(reqwest_request).await
    }
}

impl TransportResponse for reqwest::Response {
    type Error = reqwest::Error;

    /// Returns the HTTP status code; `reqwest` responses always carry one.
    fn status(&self) -> Option<StatusCode> {
        Some(reqwest::Response::status(self))
    }

    /// Consumes the `reqwest::Response` and returns its full body.
    async fn body(self) -> Result<Bytes, Self::Error> {
        self.bytes().await
    }
}

impl crate::Error for reqwest::Error {
    fn is_retryable(&self) -> bool {
        self.is_connect() || self.is_timeout()
    }
}
