//! Transport-agnostic HTTP request dispatch.

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod base_url;
pub mod dispatcher;
mod error;
pub mod method;
pub mod mime;
pub mod multipart;
pub mod platform;
pub mod prelude;
pub mod request;
pub mod status;
pub mod token;
pub mod transport;

pub use base_url::{BaseUrl, IntoBaseUrl};
pub use dispatcher::{DispatchError, Dispatcher};
pub use error::{BoxedError, Error, NetworkError};
pub use method::HttpMethod;
pub use mime::MimeType;

/// Documentation
pub mod _documentation {
    #[doc = include_str!("../README.md")]
    mod readme {}
    #[doc = include_str!("../CHANGELOG.md")]
    pub mod changelog {}
}

pub use bytes::Bytes;
