//! Hand-built `multipart/form-data` bodies.
//!
//! The body is assembled by hand rather than through a multipart library so
//! the output is byte-exact: for a fixed boundary, parameter ordering, and
//! file ordering, [`MultipartBody::encode`] is fully deterministic.

use bon::Builder;
use bytes::{BufMut, Bytes, BytesMut};

use crate::request::FilePart;

/// A `multipart/form-data` body: a boundary token, ordered form
/// parameters, and ordered file parts.
///
/// Parameters are always emitted before files, each in caller-supplied
/// order. Each file becomes its own part even when its key collides with
/// another file's key.
#[derive(Debug, Clone, Builder)]
pub struct MultipartBody {
    /// The boundary token separating parts.
    #[builder(into)]
    boundary: String,
    /// Non-file form fields, emitted first.
    #[builder(default)]
    parameters: Vec<(String, String)>,
    /// File parts, emitted after the parameters.
    #[builder(default)]
    files: Vec<FilePart>,
}

impl MultipartBody {
    /// Returns the value for the request's `Content-Type` header.
    ///
    /// The boundary is emitted unquoted.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Serializes the body.
    ///
    /// Wire layout, per part:
    ///
    /// ```text
    /// --{boundary}\r\n
    /// Content-Disposition: form-data; name="{key}"\r\n\r\n
    /// {value}\r\n
    /// --{boundary}\r\n
    /// Content-Disposition: form-data; name="{key}"; filename="{name}"\r\n
    /// Content-Type: {mime}\r\n\r\n
    /// {bytes}\r\n
    /// --{boundary}--\r\n
    /// ```
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut body = BytesMut::new();

        for (key, value) in &self.parameters {
            body.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            body.put_slice(
                format!("Content-Disposition: form-data; name=\"{key}\"\r\n\r\n").as_bytes(),
            );
            body.put_slice(value.as_bytes());
            body.put_slice(b"\r\n");
        }

        for file in &self.files {
            body.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            body.put_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    file.key, file.file_name
                )
                .as_bytes(),
            );
            body.put_slice(format!("Content-Type: {}\r\n\r\n", file.mime_type.as_str()).as_bytes());
            body.put_slice(&file.data);
            body.put_slice(b"\r\n");
        }

        body.put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body.freeze()
    }
}
