use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use percent_encoding::percent_decode_str;
use std::convert::Infallible;

/// The trailing path segment, percent-decoded.
///
/// Invalid UTF-8 is replaced with U+FFFD instead of rejecting the request, so
/// such names reach the lookup and come back as not found.
#[derive(Debug, Clone, PartialEq)]
pub struct Username(pub String);

impl Username {
    pub fn from_path(path: &str) -> Self {
        let segment = path.rsplit('/').next().unwrap_or_default();
        Self(percent_decode_str(segment).decode_utf8_lossy().into_owned())
    }
}

impl<S> FromRequestParts<S> for Username
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_path(parts.uri.path()))
    }
}
