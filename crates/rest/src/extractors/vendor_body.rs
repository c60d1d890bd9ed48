//! Vendor body extractor.
//!
//! Extracts a JSON request body into a typed DTO, mapping every failure to a
//! [`RestError`] so clients always get the same error shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::RestError;

/// Axum extractor for a JSON vendor payload.
///
/// Accepts `application/json` and any `application/*+json` type. A request
/// without a `Content-Type` header is treated as JSON. Unknown fields are
/// rejected by the DTO's own serde mapping.
///
/// # Example
///
/// ```rust,ignore
/// use vendor_rest::extractors::VendorBody;
/// use vendor_service::VendorDTO;
///
/// async fn create(VendorBody(vendor): VendorBody<VendorDTO>) {
///     println!("Creating {}", vendor.name);
/// }
/// ```
#[derive(Debug)]
pub struct VendorBody<T>(pub T);

impl<T> VendorBody<T> {
    /// Consumes the extractor and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error type for vendor body extraction failures.
#[derive(Debug, Error)]
pub enum VendorBodyRejection {
    /// The body could not be read (including exceeding the size limit).
    #[error(transparent)]
    Body(#[from] BytesRejection),
    /// JSON parsing or field mapping failed.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// The content type is not JSON.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl IntoResponse for VendorBodyRejection {
    fn into_response(self) -> Response {
        match self {
            // Keeps axum's own status, e.g. 413 for oversized bodies
            VendorBodyRejection::Body(rejection) => rejection.into_response(),
            VendorBodyRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            }
            .into_response(),
            VendorBodyRejection::UnsupportedMediaType(content_type) => {
                RestError::UnsupportedMediaType { content_type }.into_response()
            }
        }
    }
}

/// Accepts a JSON or absent content type, returning the offending value otherwise.
fn check_json_content(headers: &HeaderMap) -> Result<(), String> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };
    let raw = value.to_str().map_err(|_| "<non-ascii>".to_string())?;
    let mime: mime::Mime = raw.parse().map_err(|_| raw.to_string())?;

    let is_json = mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON));
    if is_json { Ok(()) } else { Err(raw.to_string()) }
}

impl<S, T> FromRequest<S> for VendorBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = VendorBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_json_content(req.headers()).map_err(VendorBodyRejection::UnsupportedMediaType)?;

        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| VendorBodyRejection::InvalidJson(e.to_string()))?;

        Ok(VendorBody(value))
    }
}
