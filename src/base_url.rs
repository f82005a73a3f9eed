//! A validated base address.
//!
//! [`BaseUrl`] is a newtype over [`Uri`] that guarantees the address has
//! been validated. It can be constructed from common string and URL types
//! via [`IntoBaseUrl`], and joined with a request path and query through
//! [`BaseUrl::join`].

use std::convert::Infallible;

use http::{Uri, uri::InvalidUri};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::NetworkError;

/// A validated base address.
///
/// This is a newtype over [`Uri`] which can be constructed from common
/// string and URL types via [`IntoBaseUrl`]. Once constructed, it can be
/// freely cloned and shared between requests without re-validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Uri);

impl Serialize for BaseUrl {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.into_base_url().map_err(serde::de::Error::custom)
    }
}

impl BaseUrl {
    /// Returns the inner [`Uri`].
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.0
    }

    /// Consumes the [`BaseUrl`] and returns the inner [`Uri`].
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.0
    }

    /// Resolves this base address plus a request path and optional query
    /// string into a full request [`Uri`].
    ///
    /// Any path already present on the base is preserved; a trailing slash
    /// on it is dropped so joining `https://host/v1/` with `/users` yields
    /// `https://host/v1/users`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] when the combination is not a
    /// syntactically valid URI.
    pub fn join(&self, path: &str, query: Option<&str>) -> Result<Uri, NetworkError> {
        let base_path = self.0.path();
        let base_path = base_path.strip_suffix('/').unwrap_or(base_path);
        let path_and_query = match query {
            Some(query) => format!("{base_path}{path}?{query}"),
            None => format!("{base_path}{path}"),
        };

        let mut parts = self.0.clone().into_parts();
        parts.path_and_query = Some(
            path_and_query
                .try_into()
                .map_err(|_| NetworkError::InvalidUrl)?,
        );
        Uri::from_parts(parts).map_err(|_| NetworkError::InvalidUrl)
    }
}

/// Conversion trait for types that can be turned into a [`BaseUrl`].
pub trait IntoBaseUrl {
    /// The error type returned if the conversion fails.
    type Error;

    /// Attempts to convert this value into a [`BaseUrl`].
    fn into_base_url(self) -> Result<BaseUrl, Self::Error>;
}

impl IntoBaseUrl for BaseUrl {
    type Error = Infallible;

    fn into_base_url(self) -> Result<BaseUrl, Self::Error> {
        Ok(self)
    }
}

impl IntoBaseUrl for Uri {
    type Error = Infallible;

    fn into_base_url(self) -> Result<BaseUrl, Self::Error> {
        Ok(BaseUrl(self))
    }
}

impl IntoBaseUrl for Url {
    type Error = InvalidUri;

    fn into_base_url(self) -> Result<BaseUrl, Self::Error> {
        self.as_str().parse::<Uri>().map(BaseUrl)
    }
}

impl IntoBaseUrl for &str {
    type Error = InvalidUri;

    fn into_base_url(self) -> Result<BaseUrl, Self::Error> {
        self.parse::<Uri>().map(BaseUrl)
    }
}

impl IntoBaseUrl for String {
    type Error = InvalidUri;

    fn into_base_url(self) -> Result<BaseUrl, Self::Error> {
        self.parse::<Uri>().map(BaseUrl)
    }
}
