//! Patch handler.
//!
//! `PATCH /api/v1/vendors/{id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vendor_service::{VendorPatch, VendorService};

use crate::error::RestResult;
use crate::extractors::{VendorBody, VendorId};
use crate::state::AppState;

/// Handler for partially updating a vendor.
///
/// Unlike PUT, every body field is optional. Which fields get applied is up
/// to the service.
///
/// # Response
///
/// - `200 OK` - Vendor patched
/// - `400 Bad Request` - Bad id, malformed body, or rejected by the service
/// - `404 Not Found` - No vendor with this id
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    id: VendorId,
    VendorBody(patch): VendorBody<VendorPatch>,
) -> RestResult<Response>
where
    S: VendorService,
{
    debug!(id = %id, name = ?patch.name, "Processing patch request");

    let patched = state.service().patch_by_id_and_dto(id.get(), patch).await?;

    debug!(id = %id, "Vendor patched");
    Ok((StatusCode::OK, Json(patched)).into_response())
}
