//! Read handler.
//!
//! `GET /api/v1/vendors/{id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vendor_service::VendorService;

use crate::error::RestResult;
use crate::extractors::VendorId;
use crate::state::AppState;

/// Handler for reading a single vendor.
///
/// # HTTP Request
///
/// `GET /api/v1/vendors/{id}`
///
/// # Response
///
/// - `200 OK` - Vendor found
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No vendor with this id
///
/// # Example
///
/// ```http
/// GET /api/v1/vendors/1 HTTP/1.1
/// Accept: application/json
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    id: VendorId,
) -> RestResult<Response>
where
    S: VendorService,
{
    debug!(id = %id, "Processing read request");

    let vendor = state.service().get_by_id(id.get()).await?;

    debug!(id = %id, name = %vendor.name, "Returning vendor");
    Ok((StatusCode::OK, Json(vendor)).into_response())
}
