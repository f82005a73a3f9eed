//! Deterministic HTTP status classification.

use http::StatusCode;

use crate::NetworkError;

/// Classifies an HTTP status into success or a [`NetworkError`].
///
/// The mapping is a compatibility contract and must hold verbatim:
///
/// | Status | Result |
/// |---|---|
/// | 200–299 | success |
/// | 400 | [`NetworkError::BadRequest`] |
/// | 401 | [`NetworkError::Unauthorized`] |
/// | 403 | [`NetworkError::Forbidden`] |
/// | 404 | [`NetworkError::NotFound`] |
/// | 500–599 | [`NetworkError::Server`] embedding the code |
/// | anything else | [`NetworkError::Custom`] embedding the code |
///
/// A `None` status — the transport produced no well-formed HTTP response —
/// is [`NetworkError::InvalidResponse`] before the table is consulted.
///
/// # Errors
///
/// Returns the [`NetworkError`] from the table above for every non-2xx or
/// absent status.
pub fn check(status: Option<StatusCode>) -> Result<(), NetworkError> {
    let Some(status) = status else {
        return Err(NetworkError::InvalidResponse);
    };

    match status.as_u16() {
        200..=299 => Ok(()),
        400 => Err(NetworkError::BadRequest),
        401 => Err(NetworkError::Unauthorized),
        403 => Err(NetworkError::Forbidden),
        404 => Err(NetworkError::NotFound),
        code @ 500..=599 => Err(NetworkError::Server {
            message: format!("HTTP {code}"),
        }),
        code => Err(NetworkError::Custom {
            message: format!("unhandled HTTP status {code}"),
        }),
    }
}
