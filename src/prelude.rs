//! Imports for syntax extensions.

pub use crate::IntoBaseUrl as _;
pub use crate::request::DecodeResponse as _;
pub use crate::request::MultiFileUpload as _;
pub use crate::request::Target as _;
