//! Transport and response abstractions.
//!
//! This module defines traits that decouple the dispatcher from any
//! specific networking stack. Users provide their own [`Transport`] (e.g.
//! backed by `reqwest`, `hyper`, or a WASM-compatible client) and the
//! dispatcher operates against these traits. Tests supply a scripted stub
//! returning canned bytes and a status.

#[cfg(all(not(target_arch = "wasm32"), feature = "transport-reqwest"))]
mod reqwest;

use bytes::Bytes;
use http::{Request, StatusCode};

use crate::platform::{MaybeSend, MaybeSendSync};

/// Performs the byte-level network exchange for one request.
pub trait Transport: MaybeSendSync {
    /// The error type returned for a failed exchange. The dispatcher
    /// propagates it unmodified — connectivity, timeout, and cancellation
    /// failures stay distinguishable from protocol failures.
    type Error: crate::Error;

    /// The associated response type produced by this transport.
    type Response: TransportResponse;

    /// Executes one request/response round trip.
    ///
    /// # Arguments
    ///
    /// * `request`: The `http::Request` to execute, body as `bytes::Bytes`.
    ///
    /// # Returns
    ///
    /// A `Future` that resolves to the response on success, or
    /// `Self::Error` on transport-level failure.
    fn send(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + MaybeSend;
}

/// The raw outcome of one exchange: status metadata and body bytes.
pub trait TransportResponse: MaybeSendSync {
    /// The error type when reading the response body.
    type Error: crate::Error;

    /// Returns the HTTP status code, or `None` when the transport did not
    /// produce a well-formed HTTP response.
    fn status(&self) -> Option<StatusCode>;

    /// Consumes the response and asynchronously returns its body.
    ///
    /// # Returns
    ///
    /// A `Future` that resolves to the body bytes on success, or an error
    /// if reading the body fails.
    fn body(self) -> impl Future<Output = Result<Bytes, Self::Error>> + MaybeSend;
}
