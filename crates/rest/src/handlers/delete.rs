//! Delete handler.
//!
//! `DELETE /api/v1/vendors/{id}`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vendor_service::VendorService;

use crate::error::RestResult;
use crate::extractors::VendorId;
use crate::state::AppState;

/// Handler for deleting a vendor.
///
/// # Response
///
/// - `200 OK` - Vendor deleted, empty body
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No vendor with this id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    id: VendorId,
) -> RestResult<Response>
where
    S: VendorService,
{
    debug!(id = %id, "Processing delete request");

    state.service().delete_by_id(id.get()).await?;

    debug!(id = %id, "Vendor deleted");
    Ok(StatusCode::OK.into_response())
}
