//! Update handler.
//!
//! `PUT /api/v1/vendors/{id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vendor_service::{VendorDTO, VendorService};

use crate::error::RestResult;
use crate::extractors::{VendorBody, VendorId};
use crate::state::AppState;

/// Handler for replacing a vendor.
///
/// The path id is authoritative; any `id` or `vendor_url` in the body is left
/// for the service to ignore.
///
/// # Response
///
/// - `200 OK` - Vendor replaced
/// - `400 Bad Request` - Bad id, malformed body, or rejected by the service
/// - `404 Not Found` - No vendor with this id
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    id: VendorId,
    VendorBody(vendor): VendorBody<VendorDTO>,
) -> RestResult<Response>
where
    S: VendorService,
{
    debug!(id = %id, name = %vendor.name, "Processing update request");

    let saved = state.service().save_by_id_and_dto(id.get(), vendor).await?;

    debug!(id = %id, "Vendor updated");
    Ok((StatusCode::OK, Json(saved)).into_response())
}
