//! The dispatch pipeline.
//!
//! [`Dispatcher`] is the single orchestration point: it turns a request
//! value into a transport message, performs exactly one exchange through
//! the injected [`Transport`], classifies the returned status, and runs
//! the request's decoder on the body. It holds no mutable state, so one
//! instance can serve concurrent `dispatch`/`upload` calls without
//! synchronization.

use bon::Builder;
use bytes::Bytes;
use http::{HeaderValue, header::CONTENT_TYPE};
use snafu::{ResultExt as _, Snafu};

use crate::{
    NetworkError,
    multipart::MultipartBody,
    request::{DecodeResponse, FilePart, MultiFileUpload, Request},
    status,
    token::{BoundarySource, Clock, RandomBoundary, SystemClock},
    transport::{Transport, TransportResponse},
};

/// Executes requests against an injected [`Transport`].
///
/// Immutable after construction. [`Dispatcher::new`] wires up the
/// production boundary and clock sources; the builder lets tests inject
/// deterministic ones.
#[derive(Debug, Clone, Builder)]
pub struct Dispatcher<C, B = RandomBoundary, K = SystemClock> {
    /// The transport performing the actual network exchange.
    transport: C,
    /// Source of fresh multipart boundary tokens.
    boundary_source: B,
    /// Source of timestamps for upload filename namespacing.
    clock: K,
}

impl<C: Transport> Dispatcher<C> {
    /// Creates a dispatcher with the default boundary and clock sources.
    pub fn new(transport: C) -> Self {
        Self {
            transport,
            boundary_source: RandomBoundary,
            clock: SystemClock,
        }
    }
}

impl<C, B, K> Dispatcher<C, B, K>
where
    C: Transport,
    B: BoundarySource,
    K: Clock,
{
    /// Dispatches a request and decodes the response.
    ///
    /// The request's transport message is built, sent once, the returned
    /// status classified, and the request's decoder run on the body bytes.
    /// No retries, no caching, no recovery.
    ///
    /// # Errors
    ///
    /// Transport failures pass through unmodified as
    /// [`DispatchError::Transport`]; everything else surfaces as the
    /// [`NetworkError`] taxonomy under [`DispatchError::Network`].
    pub async fn dispatch<R: Request>(
        &self,
        request: &R,
    ) -> Result<R::Output, DispatchError<C::Error, <C::Response as TransportResponse>::Error>> {
        let message = request.as_http_request().context(NetworkSnafu)?;
        self.exchange(message, request).await
    }

    /// Dispatches a file-upload request and decodes the response.
    ///
    /// The message uses the request's declared method, a fresh boundary
    /// from the injected [`BoundarySource`], and a hand-built
    /// `multipart/form-data` body holding the request's parameters (first,
    /// in caller order) and its file parts (after, in caller order). Each
    /// file's name is namespaced with a timestamp from the injected
    /// [`Clock`] and the mime type's canonical extension so repeated
    /// uploads of the same logical name do not collide.
    ///
    /// # Errors
    ///
    /// As for [`Dispatcher::dispatch`].
    pub async fn upload<R: Request + MultiFileUpload>(
        &self,
        request: &R,
    ) -> Result<R::Output, DispatchError<C::Error, <C::Response as TransportResponse>::Error>> {
        let boundary = self.boundary_source.boundary();
        let stamp = self.clock.now_unix_millis();

        let files = request
            .files()
            .into_iter()
            .map(|file| FilePart {
                file_name: format!(
                    "{}_{stamp}.{}",
                    file.file_name,
                    file.mime_type.extension()
                ),
                ..file
            })
            .collect();

        let body = MultipartBody::builder()
            .boundary(boundary)
            .parameters(request.parameters())
            .files(files)
            .build();

        let uri = request
            .base_url()
            .join(request.path(), None)
            .context(NetworkSnafu)?;

        let (mut parts, ()) = http::Request::new(()).into_parts();
        parts.method = request.method().to_http().context(NetworkSnafu)?;
        parts.uri = uri;
        parts.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&body.content_type())
                .map_err(|_| NetworkError::InvalidEncoding)
                .context(NetworkSnafu)?,
        );

        let message = http::Request::from_parts(parts, body.encode());
        self.exchange(message, request).await
    }

    async fn exchange<R: DecodeResponse>(
        &self,
        message: http::Request<Bytes>,
        request: &R,
    ) -> Result<R::Output, DispatchError<C::Error, <C::Response as TransportResponse>::Error>> {
        let response = self.transport.send(message).await.context(TransportSnafu)?;
        let http_status = response.status();
        let body = response.body().await.context(ResponseBodyReadSnafu)?;

        status::check(http_status).context(NetworkSnafu)?;
        request.decode(&body).context(NetworkSnafu)
    }
}

/// Errors that can occur when dispatching a request.
#[derive(Debug, Snafu)]
pub enum DispatchError<TransportErr: crate::Error, RespErr: crate::Error> {
    /// The transport failed; the source is passed through unmodified so
    /// callers can distinguish network failure from protocol failure.
    #[snafu(display("Failed to make HTTP request"))]
    Transport {
        /// The transport's own error.
        source: TransportErr,
    },
    /// Reading the response body failed.
    #[snafu(display("Failed to read response body"))]
    ResponseBodyRead {
        /// The underlying error when reading the response body.
        source: RespErr,
    },
    /// A protocol, status, or decoding failure.
    #[snafu(display("{source}"))]
    Network {
        /// The classified failure.
        source: NetworkError,
    },
}

impl<TransportErr: crate::Error, RespErr: crate::Error> crate::Error
    for DispatchError<TransportErr, RespErr>
{
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source } => source.is_retryable(),
            Self::ResponseBodyRead { source } => source.is_retryable(),
            Self::Network { source } => source.is_retryable(),
        }
    }
}
