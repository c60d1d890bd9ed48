//! Vendor id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `{id}` path segment.
///
/// The id is parsed as a signed 64-bit integer and handed to the service
/// unchanged. Anything else is a 400 with the standard error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorId(pub i64);

impl VendorId {
    /// Returns the raw id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S> FromRequestParts<S> for VendorId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        raw.parse::<i64>()
            .map(VendorId)
            .map_err(|_| RestError::BadRequest {
                message: format!("Vendor id must be an integer, got '{}'", raw),
            })
    }
}
